pub enum Msg {
    SetCompany(String),
    SetModel(String),
    SetPrice(String),
    SetDescription(String),
    FileSelected(web_sys::File),
    /// A preview finished reading; `selection` identifies the pick it belongs to.
    PreviewReady { selection: u64, data_url: String },
    ClearImage,
    Submit,
    Close,
}
