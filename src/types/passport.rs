//! Errors a bot reports back about Telegram Passport data a user submitted.

api_object! {
    /// A field of the data is wrong.
    pub struct PassportElementErrorDataField ["source" = "data"] {
        pub kind: String => "type",
        pub field_name: String,
        pub data_hash: String,
        pub message: String,
    }
}

api_object! {
    pub struct PassportElementErrorFrontSide ["source" = "front_side"] {
        pub kind: String => "type",
        pub file_hash: String,
        pub message: String,
    }
}

api_object! {
    pub struct PassportElementErrorReverseSide ["source" = "reverse_side"] {
        pub kind: String => "type",
        pub file_hash: String,
        pub message: String,
    }
}

api_object! {
    pub struct PassportElementErrorSelfie ["source" = "selfie"] {
        pub kind: String => "type",
        pub file_hash: String,
        pub message: String,
    }
}

api_object! {
    /// One document scan is wrong.
    pub struct PassportElementErrorFile ["source" = "file"] {
        pub kind: String => "type",
        pub file_hash: String,
        pub message: String,
    }
}

api_object! {
    /// The list of document scans is wrong.
    pub struct PassportElementErrorFiles ["source" = "files"] {
        pub kind: String => "type",
        pub file_hashes: Vec<String>,
        pub message: String,
    }
}

api_object! {
    pub struct PassportElementErrorTranslationFile ["source" = "translation_file"] {
        pub kind: String => "type",
        pub file_hash: String,
        pub message: String,
    }
}

api_object! {
    pub struct PassportElementErrorTranslationFiles ["source" = "translation_files"] {
        pub kind: String => "type",
        pub file_hashes: Vec<String>,
        pub message: String,
    }
}

api_object! {
    pub struct PassportElementErrorUnspecified ["source" = "unspecified"] {
        pub kind: String => "type",
        pub element_hash: String,
        pub message: String,
    }
}

tagged_union! {
    pub enum PassportElementError ["source"] {
        DataField(PassportElementErrorDataField) = "data",
        FrontSide(PassportElementErrorFrontSide) = "front_side",
        ReverseSide(PassportElementErrorReverseSide) = "reverse_side",
        Selfie(PassportElementErrorSelfie) = "selfie",
        File(PassportElementErrorFile) = "file",
        Files(PassportElementErrorFiles) = "files",
        TranslationFile(PassportElementErrorTranslationFile) = "translation_file",
        TranslationFiles(PassportElementErrorTranslationFiles) = "translation_files",
        Unspecified(PassportElementErrorUnspecified) = "unspecified",
    }
}

impl PassportElementError {
    /// Text shown to the user.
    pub fn message(&self) -> &str {
        match self {
            Self::DataField(e) => &e.message,
            Self::FrontSide(e) => &e.message,
            Self::ReverseSide(e) => &e.message,
            Self::Selfie(e) => &e.message,
            Self::File(e) => &e.message,
            Self::Files(e) => &e.message,
            Self::TranslationFile(e) => &e.message,
            Self::TranslationFiles(e) => &e.message,
            Self::Unspecified(e) => &e.message,
        }
    }
}
