//! JSON encoding of request bodies.
//!
//! `serde_json` writes `NaN` and infinite floats as `null`. A request body
//! must not change meaning on its way to the wire, so [`encode_body`] first
//! walks the value with [`FiniteFloats`] and rejects any non-finite float.

use serde::ser::{self, Error as _};
use serde::Serialize;
use serde_json::Value;

/// Encodes a request body as a JSON value.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if the body contains a `NaN` or infinite
/// float, or if `serde_json` cannot represent it (e.g. a map with non-string
/// keys).
///
/// # Example
///
/// ```rust
/// use ecomail_api::clients::encode_body;
/// use serde_json::json;
///
/// assert_eq!(encode_body(&json!({"amount": 9.5})).unwrap(), json!({"amount": 9.5}));
/// assert!(encode_body(&vec![1.0, f64::NAN]).is_err());
/// ```
pub fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<Value, serde_json::Error> {
    body.serialize(FiniteFloats)?;
    serde_json::to_value(body)
}

/// A serializer that produces nothing and fails on non-finite floats.
#[derive(Clone, Copy, Debug)]
struct FiniteFloats;

fn check_float(value: f64) -> Result<(), serde_json::Error> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(serde_json::Error::custom(format!(
            "{value} is not a finite number and cannot be encoded as JSON"
        )))
    }
}

impl ser::Serializer for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;
    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    fn serialize_bool(self, _: bool) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_i8(self, _: i8) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_i16(self, _: i16) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_i32(self, _: i32) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_i64(self, _: i64) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_i128(self, _: i128) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_u8(self, _: u8) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_u16(self, _: u16) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_u32(self, _: u32) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_u64(self, _: u64) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_u128(self, _: u128) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_f32(self, value: f32) -> Result<(), Self::Error> {
        check_float(f64::from(value))
    }

    fn serialize_f64(self, value: f64) -> Result<(), Self::Error> {
        check_float(value)
    }

    fn serialize_char(self, _: char) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_str(self, _: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_bytes(self, _: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_none(self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<(), Self::Error> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_unit_struct(self, _: &'static str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _: &'static str,
        value: &T,
    ) -> Result<(), Self::Error> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        value: &T,
    ) -> Result<(), Self::Error> {
        value.serialize(self)
    }

    fn serialize_seq(self, _: Option<usize>) -> Result<Self, Self::Error> {
        Ok(self)
    }

    fn serialize_tuple(self, _: usize) -> Result<Self, Self::Error> {
        Ok(self)
    }

    fn serialize_tuple_struct(self, _: &'static str, _: usize) -> Result<Self, Self::Error> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self, Self::Error> {
        Ok(self)
    }

    fn serialize_map(self, _: Option<usize>) -> Result<Self, Self::Error> {
        Ok(self)
    }

    fn serialize_struct(self, _: &'static str, _: usize) -> Result<Self, Self::Error> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self, Self::Error> {
        Ok(self)
    }
}

impl ser::SerializeSeq for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Self::Error> {
        value.serialize(*self)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl ser::SerializeTuple for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Self::Error> {
        value.serialize(*self)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl ser::SerializeTupleStruct for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Self::Error> {
        value.serialize(*self)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl ser::SerializeTupleVariant for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Self::Error> {
        value.serialize(*self)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl ser::SerializeMap for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), Self::Error> {
        key.serialize(*self)
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Self::Error> {
        value.serialize(*self)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl ser::SerializeStruct for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        _: &'static str,
        value: &T,
    ) -> Result<(), Self::Error> {
        value.serialize(*self)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl ser::SerializeStructVariant for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        _: &'static str,
        value: &T,
    ) -> Result<(), Self::Error> {
        value.serialize(*self)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Transaction {
        order_id: String,
        amount: f64,
        items: Vec<Item>,
        coupon: Option<f32>,
    }

    #[derive(Serialize)]
    struct Item {
        code: &'static str,
        price: f64,
    }

    #[derive(Serialize)]
    enum Adjustment {
        Discount { percent: f64 },
    }

    fn transaction(amount: f64, price: f64) -> Transaction {
        Transaction {
            order_id: "T-1".to_string(),
            amount,
            items: vec![Item { code: "SKU", price }],
            coupon: None,
        }
    }

    #[test]
    fn test_finite_body_encodes_like_serde_json() {
        let body = transaction(99.5, 49.75);

        assert_eq!(encode_body(&body).unwrap(), serde_json::to_value(&body).unwrap());
    }

    #[test]
    fn test_nan_at_top_level_field_is_rejected() {
        let error = encode_body(&transaction(f64::NAN, 1.0)).unwrap_err();

        assert!(error.to_string().contains("NaN"));
    }

    #[test]
    fn test_infinity_in_nested_sequence_is_rejected() {
        assert!(encode_body(&transaction(1.0, f64::INFINITY)).is_err());
        assert!(encode_body(&transaction(1.0, f64::NEG_INFINITY)).is_err());
    }

    #[test]
    fn test_non_finite_f32_inside_option_is_rejected() {
        let mut body = transaction(1.0, 1.0);
        body.coupon = Some(f32::NAN);

        assert!(encode_body(&body).is_err());
    }

    #[test]
    fn test_non_finite_values_in_maps_and_variants_are_rejected() {
        let mut map = BTreeMap::new();
        map.insert("ratio", vec![0.5, f64::INFINITY]);
        assert!(encode_body(&map).is_err());

        assert!(encode_body(&Adjustment::Discount { percent: f64::NAN }).is_err());
        assert!(encode_body(&Adjustment::Discount { percent: 10.0 }).is_ok());
    }

    #[test]
    fn test_json_values_pass_through() {
        let body = json!({"query": "jan@example.cz", "nested": [1, 2.5, null, {"a": true}]});

        assert_eq!(encode_body(&body).unwrap(), body);
    }
}
