//! Descriptors of files the server already stores.

api_object! {
    /// One size of a photo or of a file/sticker thumbnail.
    pub struct PhotoSize {
        pub file_id: String,
        pub file_unique_id: String,
        pub width: i64,
        pub height: i64,
        pub file_size: Option<i64>,
    }
}

api_object! {
    /// An audio file to be treated as music.
    pub struct Audio {
        pub file_id: String,
        pub file_unique_id: String,
        pub duration: i64,
        pub performer: Option<String>,
        pub title: Option<String>,
        pub file_name: Option<String>,
        pub mime_type: Option<String>,
        pub file_size: Option<i64>,
        pub thumb: Option<PhotoSize>,
    }
}

api_object! {
    /// A general file.
    pub struct Document {
        pub file_id: String,
        pub file_unique_id: String,
        pub thumb: Option<PhotoSize>,
        pub file_name: Option<String>,
        pub mime_type: Option<String>,
        pub file_size: Option<i64>,
    }
}

api_object! {
    /// A GIF or an H.264/MPEG-4 AVC video without sound.
    pub struct Animation {
        pub file_id: String,
        pub file_unique_id: String,
        pub width: i64,
        pub height: i64,
        pub duration: i64,
        pub thumb: Option<PhotoSize>,
        pub file_name: Option<String>,
        pub mime_type: Option<String>,
        pub file_size: Option<i64>,
    }
}

api_object! {
    pub struct Video {
        pub file_id: String,
        pub file_unique_id: String,
        pub width: i64,
        pub height: i64,
        pub duration: i64,
        pub thumb: Option<PhotoSize>,
        pub file_name: Option<String>,
        pub mime_type: Option<String>,
        pub file_size: Option<i64>,
    }
}

api_object! {
    /// A round video message.
    pub struct VideoNote {
        pub file_id: String,
        pub file_unique_id: String,
        /// Diameter in pixels.
        pub length: i64,
        pub duration: i64,
        pub thumb: Option<PhotoSize>,
        pub file_size: Option<i64>,
    }
}

api_object! {
    pub struct Voice {
        pub file_id: String,
        pub file_unique_id: String,
        pub duration: i64,
        pub mime_type: Option<String>,
        pub file_size: Option<i64>,
    }
}

api_object! {
    pub struct Sticker {
        pub file_id: String,
        pub file_unique_id: String,
        pub width: i64,
        pub height: i64,
        pub is_animated: bool,
        pub thumb: Option<PhotoSize>,
        pub emoji: Option<String>,
        pub set_name: Option<String>,
        pub mask_position: Option<MaskPosition>,
        pub file_size: Option<i64>,
    }
}

api_object! {
    pub struct StickerSet {
        pub name: String,
        pub title: String,
        pub is_animated: bool,
        pub contains_masks: bool,
        pub stickers: Vec<Sticker>,
        pub thumb: Option<PhotoSize>,
    }
}

api_object! {
    /// Where a mask is placed on a face.
    pub struct MaskPosition {
        /// `forehead`, `eyes`, `mouth` or `chin`.
        pub point: String,
        pub x_shift: f64,
        pub y_shift: f64,
        pub scale: f64,
    }
}

api_object! {
    /// A file ready to be downloaded.
    pub struct File {
        pub file_id: String,
        pub file_unique_id: String,
        pub file_size: Option<i64>,
        pub file_path: Option<String>,
    }
}

api_object! {
    pub struct UserProfilePhotos {
        pub total_count: i64,
        /// Up to four sizes of each profile picture.
        pub photos: Vec<Vec<PhotoSize>>,
    }
}

impl PhotoSize {
    /// Pixel count, saturating at `i64::MAX` for absurd dimensions.
    pub fn area(&self) -> i64 {
        self.width.saturating_mul(self.height)
    }
}

impl File {
    /// Download link for this file, valid for at least an hour after `getFile`.
    pub fn download_url(&self, base_url: &str, token: &str) -> Option<String> {
        self.file_path
            .as_ref()
            .map(|path| format!("{}/file/bot{}/{}", base_url, token, path))
    }
}
