pub enum Msg {
    UpdateField { name: &'static str, value: String },
    /// Re-validates one field when it loses focus, once it has been touched.
    Blur(&'static str),
    Submit,
    /// Hands the values to the submission handler and redirects.
    Dispatch,
}
