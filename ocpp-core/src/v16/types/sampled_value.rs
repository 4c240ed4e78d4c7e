use super::{Location, Measurand, Phase, ReadingContext, UnitOfMeasure, ValueFormat};

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct SampledValue {
        /// Raw reading; a decimal unless `format` is `SignedData`.
        pub value: String => req "value",
        pub context: Option<ReadingContext> => opt "context",
        pub format: Option<ValueFormat> => opt "format",
        pub measurand: Option<Measurand> => opt "measurand",
        pub phase: Option<Phase> => opt "phase",
        pub location: Option<Location> => opt "location",
        pub unit: Option<UnitOfMeasure> => opt "unit",
    }
}

impl SampledValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            context: None,
            format: None,
            measurand: None,
            phase: None,
            location: None,
            unit: None,
        }
    }
}
