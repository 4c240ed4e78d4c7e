use super::super::types::IdTagInfo;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct AuthorizeRequest {
        pub id_tag: String => req "idTag" [max_len 20],
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct AuthorizeResponse {
        pub id_tag_info: IdTagInfo => req "idTagInfo",
    }
}
