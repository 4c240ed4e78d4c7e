record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct KeyValue {
        pub key: String => req "key" [max_len 50],
        pub readonly: bool => req "readonly",
        pub value: Option<String> => opt "value" [max_len 500],
    }
}
