/// A typed console line mapped to the skill operation it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    GetNewTip,
    PlayQuiz,
    Answer(Vec<String>),
    Help,
    Stop,
    Cancel,
}

impl Intent {
    /// Map a line of input to an intent. Blank lines map to nothing.
    ///
    /// `answer a, b, c` submits several answers at once; any line that is not
    /// a command is taken as one spoken answer.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let lowered = line.to_lowercase();
        let intent = match lowered.as_str() {
            "tip" | "a tip" | "give me a tip" | "another tip" | "leadership tip" => Self::GetNewTip,
            "quiz" | "play the quiz" | "play quiz" | "question" | "another question" => {
                Self::PlayQuiz
            }
            "help" => Self::Help,
            "stop" | "quit" | "exit" | "goodbye" => Self::Stop,
            "cancel" => Self::Cancel,
            _ => match line.split_once(char::is_whitespace) {
                Some((head, rest)) if head.trim_end_matches(':').eq_ignore_ascii_case("answer") => {
                    Self::Answer(rest.split(',').map(|a| a.trim().to_owned()).collect())
                }
                _ => Self::Answer(vec![line.to_owned()]),
            },
        };

        Some(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_case_insensitive() {
        assert_eq!(Intent::parse("Tip"), Some(Intent::GetNewTip));
        assert_eq!(Intent::parse("  PLAY THE QUIZ "), Some(Intent::PlayQuiz));
        assert_eq!(Intent::parse("quit"), Some(Intent::Stop));
        assert_eq!(Intent::parse(""), None);
    }

    #[test]
    fn answer_prefix_splits_on_commas() {
        assert_eq!(
            Intent::parse("answer: situation, behavior,impact"),
            Some(Intent::Answer(vec![
                "situation".into(),
                "behavior".into(),
                "impact".into()
            ]))
        );
    }

    #[test]
    fn free_text_is_a_single_answer() {
        assert_eq!(
            Intent::parse("servant leadership"),
            Some(Intent::Answer(vec!["servant leadership".into()]))
        );
    }
}
