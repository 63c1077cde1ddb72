//! JSON helpers: plain delegation to `serde_json`.

use serde::de::DeserializeOwned;
use serde::Serialize;

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

/// Builds a value of type `T` from JSON text.
pub fn from_json<T: DeserializeOwned>(text: &str) -> serde_json::Result<T> {
    serde_json::from_str(text)
}

#[cfg(test)]
mod test_json {
    use super::*;
    use crate::shapes::Rectangle;

    #[test]
    fn serializes() {
        assert_eq!(to_json(&[1, 2, 3]).unwrap(), "[1,2,3]");
        assert_eq!(to_json(&Rectangle::new(10.0, 20.0)).unwrap(), r#"{"width":10.0,"height":20.0}"#);
    }

    #[test]
    fn builds_typed_value() {
        let rect: Rectangle = from_json(r#"{ "width": 10, "height": 20 }"#).unwrap();
        assert_eq!(rect, Rectangle::new(10.0, 20.0));
        assert_eq!(rect.area(), 200.0);

        let back: Rectangle = from_json(&to_json(&rect).unwrap()).unwrap();
        assert_eq!(back, rect);
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!(from_json::<Rectangle>(r#"{ "width": 10 }"#).is_err());
        assert!(from_json::<Rectangle>("not json").is_err());
    }
}
