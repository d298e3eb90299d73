//! Converter selection from learned column types.

use crate::{Converter, ConverterKind};
use migrator_core::FieldType;

impl ConverterKind {
    /// Kind of converter a column of `field_type` needs, if any.
    ///
    /// Plain columns need none and pass through unchanged.
    pub fn for_field_type(field_type: &FieldType) -> Option<Self> {
        match field_type {
            FieldType::Boolean => Some(Self::Boolean),
            FieldType::Timestamp => Some(Self::Timestamp),
            FieldType::Enum(_) => Some(Self::Set),
            FieldType::Array(item) => match item.as_ref() {
                FieldType::Enum(_) => Some(Self::Set),
                FieldType::Any
                | FieldType::Boolean
                | FieldType::Timestamp
                | FieldType::Array(_) => None,
            },
            FieldType::Any => None,
        }
    }
}

/// Build the converter a column of `field_type` needs, if any.
pub fn converter_for(field_type: &FieldType) -> Option<Converter> {
    ConverterKind::for_field_type(field_type).and_then(|kind| kind.bind(field_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(t: &FieldType) -> Option<ConverterKind> {
        converter_for(t).map(|c| c.kind())
    }

    #[test]
    fn test_array_of_enum_routes_to_set() {
        let t = FieldType::array(FieldType::enumeration(["a", "b"]));
        assert_eq!(kind_of(&t), Some(ConverterKind::Set));
    }

    #[test]
    fn test_scalar_types() {
        assert_eq!(kind_of(&FieldType::Boolean), Some(ConverterKind::Boolean));
        assert_eq!(
            kind_of(&FieldType::Timestamp),
            Some(ConverterKind::Timestamp)
        );
        assert_eq!(
            kind_of(&FieldType::enumeration(["x"])),
            Some(ConverterKind::Set)
        );
    }

    #[test]
    fn test_plain_types_pass_through() {
        assert_eq!(kind_of(&FieldType::Any), None);
        assert_eq!(kind_of(&FieldType::array(FieldType::Any)), None);
        assert_eq!(kind_of(&FieldType::array(FieldType::Boolean)), None);
    }
}
