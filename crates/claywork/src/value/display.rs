//! Display implementations for values

use std::fmt;

use super::Value;

impl fmt::Display for dyn Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Clay, Playdoh};

    #[test]
    fn test_display_matches_render() {
        let value: Box<dyn Value> = Box::new(Playdoh::new("red", 12));
        assert_eq!(value.to_string(), value.render());
    }

    #[test]
    fn test_display_in_format() {
        let value: &dyn Value = &Clay::new("grey", 3);
        assert_eq!(
            format!("<{}>", value),
            r#"<Clay { color: "grey", weight: 3 }>"#
        );
    }
}
