use super::IdTagInfo;

record! {
    /// One entry of the local authorization list.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct AuthorizationData {
        pub id_tag: String => req "idTag" [max_len 20],
        pub id_tag_info: Option<IdTagInfo> => opt "idTagInfo",
    }
}
