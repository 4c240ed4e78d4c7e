/// Declares a payload struct together with its field table.
///
/// Each field names its wire key, its requirement level and optional checks
/// from [`crate::codec::check`]:
///
/// ```ignore
/// record! {
///     #[derive(Debug, Clone, PartialEq, Eq, Hash)]
///     pub struct StatusInfo {
///         pub reason_code: String => req "reasonCode" [max_len 20],
///         pub additional_info: Option<String> => opt "additionalInfo" [max_len 512],
///         pub custom_data: Option<CustomData> => opt "customData",
///     }
/// }
/// ```
///
/// Levels: `req`, `opt`, `set` (non-empty, duplicates merged), `opt_set`,
/// `bag` (optional, may be empty), `unique` (non-empty, duplicates rejected),
/// `opt_unique`, and `attr` / `opt_attr` for scalars that SOAP carries as XML
/// attributes rather than child elements. Fields are read and written in
/// declaration order.
#[macro_export]
macro_rules! record {
    (@read $f:ident, req, $wire:literal) => { $f.mandatory($wire) };
    (@read $f:ident, opt, $wire:literal) => { $f.optional($wire) };
    (@read $f:ident, set, $wire:literal) => { $f.mandatory_collection($wire) };
    (@read $f:ident, opt_set, $wire:literal) => { $f.optional_collection($wire) };
    (@read $f:ident, bag, $wire:literal) => { $f.optional_collection_or_empty($wire) };
    (@read $f:ident, unique, $wire:literal) => { $f.mandatory_unique($wire) };
    (@read $f:ident, opt_unique, $wire:literal) => { $f.optional_unique($wire) };
    (@read $f:ident, attr, $wire:literal) => { $f.mandatory($wire) };
    (@read $f:ident, opt_attr, $wire:literal) => { $f.optional($wire) };

    (@write $f:ident, req, $wire:literal, $v:expr) => { $f.put($wire, $v) };
    (@write $f:ident, set, $wire:literal, $v:expr) => { $f.put($wire, $v) };
    (@write $f:ident, unique, $wire:literal, $v:expr) => { $f.put($wire, $v) };
    (@write $f:ident, attr, $wire:literal, $v:expr) => { $f.put_attribute($wire, $v) };
    (@write $f:ident, opt_attr, $wire:literal, $v:expr) => { $f.put_optional_attribute($wire, $v) };
    (@write $f:ident, $other:ident, $wire:literal, $v:expr) => { $f.put_optional($wire, $v) };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty => $level:ident $wire:literal
                    $([ $($check:ident $arg:literal),+ ])?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        impl $crate::codec::Payload for $name {
            fn read(
                fields: &$crate::codec::FieldReader<'_>,
            ) -> ::core::result::Result<Self, $crate::error::ParseError> {
                let _ = fields;
                $(
                    let $field: $ty = $crate::record!(@read fields, $level, $wire)?;
                    $($(
                        $crate::codec::check::$check(&$field, $arg)
                            .map_err(|kind| $crate::error::ParseError::new($wire, kind))?;
                    )+)?
                )*
                ::core::result::Result::Ok(Self { $($field),* })
            }

            fn write(&self, fields: &mut $crate::codec::FieldWriter) {
                let _ = &fields;
                $( $crate::record!(@write fields, $level, $wire, &self.$field); )*
            }
        }

        impl $crate::codec::FromNode for $name {
            fn from_node(
                node: &$crate::node::Node,
            ) -> ::core::result::Result<Self, $crate::error::ParseErrorKind> {
                $crate::codec::nested(node)
            }
        }

        impl $crate::codec::ToNode for $name {
            fn to_node(&self) -> $crate::node::Node {
                $crate::node::Node::Record($crate::codec::Payload::to_record(self))
            }
        }
    };
}

/// Declares a closed enumeration with its exact wire spellings.
#[macro_export]
macro_rules! ocpp_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::error::ParseErrorKind;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                match s {
                    $( $wire => ::core::result::Result::Ok($name::$variant), )+
                    other => ::core::result::Result::Err($crate::error::ParseErrorKind::InvalidValue(
                        ::std::format!("`{}` is not a valid {}", other, stringify!($name)),
                    )),
                }
            }
        }

        impl $crate::codec::FromNode for $name {
            fn from_node(
                node: &$crate::node::Node,
            ) -> ::core::result::Result<Self, $crate::error::ParseErrorKind> {
                match node {
                    // XML text may carry layout whitespace, JSON strings are exact
                    $crate::node::Node::Text(text) => text.trim().parse(),
                    other => $crate::codec::text(other)?.parse(),
                }
            }
        }

        impl $crate::codec::ToNode for $name {
            fn to_node(&self) -> $crate::node::Node {
                $crate::node::Node::String(self.as_str().to_owned())
            }
        }
    };
}

/// Declares the action catalogue of one protocol version.
///
/// Generates a marker type implementing [`crate::envelope::Action`] and
/// [`crate::dispatch::Member`] per action, and an enum over all request
/// payloads implementing [`crate::dispatch::Catalogue`].
#[macro_export]
macro_rules! actions {
    (
        $(#[$meta:meta])*
        $vis:vis enum $catalogue:ident;
        $( $(#[$ameta:meta])* $action:ident => $req:ty, $res:ty; )+
    ) => {
        $(
            $(#[$ameta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $action;

            impl $crate::envelope::Action for $action {
                const NAME: &'static str = stringify!($action);
                type Request = $req;
                type Response = $res;
            }

            impl $crate::dispatch::Member<$catalogue> for $action {
                fn wrap(payload: $req) -> $catalogue {
                    $catalogue::$action(payload)
                }
            }
        )+

        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $catalogue {
            $( $action($req), )+
        }

        impl $crate::dispatch::Catalogue for $catalogue {
            const ACTIONS: &'static [&'static str] = &[$(stringify!($action)),+];

            fn decode(
                action: &str,
                record: &$crate::node::Record,
            ) -> ::core::result::Result<Self, $crate::error::Error> {
                match action {
                    $(
                        stringify!($action) => ::core::result::Result::Ok($catalogue::$action(
                            <$req as $crate::codec::Payload>::try_parse(record)?,
                        )),
                    )+
                    other => ::core::result::Result::Err($crate::error::Error::UnknownAction(
                        other.to_owned(),
                    )),
                }
            }

            fn action(&self) -> &'static str {
                match self {
                    $( $catalogue::$action(_) => stringify!($action), )+
                }
            }

            fn to_record(&self) -> $crate::node::Record {
                match self {
                    $( $catalogue::$action(payload) => $crate::codec::Payload::to_record(payload), )+
                }
            }
        }
    };
}
