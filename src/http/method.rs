use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Methods the engine has a handler for. Anything else is answered with 501.
#[derive(EnumString, EnumIter, Display, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Method {
    #[strum(serialize = "GET")]
    GET,
    #[strum(serialize = "OPTIONS")]
    OPTIONS,
}

impl Method {
    /// Value of the `Allow` header: every implemented method, in declaration order.
    pub fn allow_header() -> String {
        Method::iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
