/// An order as held by the store.
///
/// `date` is `dd-MM-yyyy` and `time` is `HH:mm:ss` (24h). Both are kept as the
/// strings the caller sent so that what comes back from `get` is exactly what
/// was added. `None` means the field was missing from the request; such an
/// order never passes validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: i32,
    pub date: Option<String>,
    pub time: Option<String>,
}

#[cfg(test)]
impl Order {
    pub fn new(id: i32, date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            id,
            date: Some(date.into()),
            time: Some(time.into()),
        }
    }
}
