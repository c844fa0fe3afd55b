//! Keyboards attached to outgoing messages.

api_object! {
    /// Buttons shown right below a message.
    pub struct InlineKeyboardMarkup {
        pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
    }
}

api_object! {
    /// Exactly one of the optional fields should be set; the server enforces it.
    pub struct InlineKeyboardButton {
        pub text: String,
        pub url: Option<String>,
        pub login_url: Option<LoginUrl>,
        pub callback_data: Option<String>,
        pub switch_inline_query: Option<String>,
        pub switch_inline_query_current_chat: Option<String>,
        pub pay: Option<bool>,
    }
}

api_object! {
    pub struct LoginUrl {
        pub url: String,
        pub forward_text: Option<String>,
        pub bot_username: Option<String>,
        pub request_write_access: Option<bool>,
    }
}

api_object! {
    /// A custom keyboard replacing the user's.
    pub struct ReplyKeyboardMarkup {
        pub keyboard: Vec<Vec<KeyboardButton>>,
        pub resize_keyboard: Option<bool>,
        pub one_time_keyboard: Option<bool>,
        pub selective: Option<bool>,
    }
}

api_object! {
    pub struct KeyboardButton {
        pub text: String,
        pub request_contact: Option<bool>,
        pub request_location: Option<bool>,
        pub request_poll: Option<KeyboardButtonPollType>,
    }
}

api_object! {
    pub struct KeyboardButtonPollType {
        /// `quiz`, `regular`, or unset for any kind.
        pub kind: Option<String> => "type",
    }
}

api_object! {
    pub struct ReplyKeyboardRemove {
        pub remove_keyboard: bool,
        pub selective: Option<bool>,
    }
}

api_object! {
    /// Show a reply interface as if the user had tapped "Reply".
    pub struct ForceReply {
        pub force_reply: bool,
        pub selective: Option<bool>,
    }
}

untagged_union! {
    /// Any of the keyboards a send method accepts as `reply_markup`.
    pub enum ReplyMarkup {
        InlineKeyboard(InlineKeyboardMarkup),
        Keyboard(ReplyKeyboardMarkup),
        Remove(ReplyKeyboardRemove),
        ForceReply(ForceReply),
    }
}

impl InlineKeyboardButton {
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::plain(text)
        }
    }

    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            callback_data: Some(data.into()),
            ..Self::plain(text)
        }
    }

    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
            login_url: None,
            callback_data: None,
            switch_inline_query: None,
            switch_inline_query_current_chat: None,
            pay: None,
        }
    }
}

impl KeyboardButton {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            request_contact: None,
            request_location: None,
            request_poll: None,
        }
    }
}
