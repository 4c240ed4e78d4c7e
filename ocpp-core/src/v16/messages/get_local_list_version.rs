record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct GetLocalListVersionRequest {}
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct GetLocalListVersionResponse {
        /// -1 when local authorization lists are not supported, 0 when none is installed.
        pub list_version: i32 => req "listVersion",
    }
}
