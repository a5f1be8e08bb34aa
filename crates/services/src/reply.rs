use serde::{Deserialize, Serialize};

/// Simple title + body card shown alongside speech on devices with a screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub content: String,
}

/// Plain response data for the host to render and send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub speech: String,
    /// Spoken again if the user stays silent; `None` for final statements.
    pub reprompt: Option<String>,
    pub card: Option<Card>,
    pub end_session: bool,
}

impl Reply {
    /// A reply that keeps the session open and repeats itself as the reprompt.
    #[must_use]
    pub fn ask(speech: impl Into<String>) -> Self {
        let speech = speech.into();
        Self {
            reprompt: Some(speech.clone()),
            speech,
            card: None,
            end_session: false,
        }
    }

    /// A final statement that closes the session.
    #[must_use]
    pub fn tell(speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            reprompt: None,
            card: None,
            end_session: true,
        }
    }

    #[must_use]
    pub fn with_reprompt(mut self, reprompt: impl Into<String>) -> Self {
        self.reprompt = Some(reprompt.into());
        self
    }

    #[must_use]
    pub fn with_card(mut self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.card = Some(Card {
            title: title.into(),
            content: content.into(),
        });
        self
    }
}
