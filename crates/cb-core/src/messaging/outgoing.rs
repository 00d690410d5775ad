//! Transport-neutral outbound message model.

/// How the transport should interpret the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMarkup {
    #[default]
    Plain,
    Html,
}

/// Inline keyboard attached under a message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InlineKeyboard {
    pub rows: Vec<Vec<InlineButton>>,
}

impl InlineKeyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one row of buttons. Builder style, used by the renderers.
    pub fn row(mut self, buttons: Vec<InlineButton>) -> Self {
        self.rows.push(buttons);
        self
    }

    /// Keyboard with a single URL button, as attached under relayed media.
    pub fn url_button(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new().row(vec![InlineButton::url(label, url)])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineButton {
    /// Sends callback data back to the bot when pressed.
    Callback { label: String, data: String },
    /// Opens a URL when pressed.
    Url { label: String, url: String },
}

impl InlineButton {
    pub fn callback(label: impl Into<String>, data: impl Into<String>) -> Self {
        InlineButton::Callback {
            label: label.into(),
            data: data.into(),
        }
    }

    pub fn url(label: impl Into<String>, url: impl Into<String>) -> Self {
        InlineButton::Url {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// One outbound message: text, markup mode and an optional keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub text: String,
    pub markup: TextMarkup,
    pub keyboard: Option<InlineKeyboard>,
}

impl OutgoingMessage {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: TextMarkup::Plain,
            keyboard: None,
        }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: TextMarkup::Html,
            keyboard: None,
        }
    }

    pub fn with_keyboard(mut self, keyboard: InlineKeyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}
