use super::super::types::ClearCacheStatus;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct ClearCacheRequest {}
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct ClearCacheResponse {
        pub status: ClearCacheStatus => req "status",
    }
}
