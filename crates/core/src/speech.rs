//! Spoken text assembled from grading results and session progress.

use crate::grading::GradeReport;

pub const LAUNCH_PROMPT: &str = "Do you want a leadership tip or to play the quiz?";
pub const LAUNCH_REPROMPT: &str = "With Great Leader, you can get leadership tips to expand your \
     knowledge of leadership or you can test your current knowledge by playing the quiz";
pub const TIP_FOLLOW_UP: &str = "Would you like another fact or the quiz?";
pub const CARD_TITLE: &str = "Great Leader";
pub const ALL_CORRECT: &str = "Great job! That is correct.";
pub const CONTINUE_PROMPT: &str = "Would you like another question, or a leadership tip?";
pub const NO_ACTIVE_QUESTION: &str =
    "There is no quiz question waiting for an answer. Do you want a leadership tip or to play the quiz?";
pub const HELP: &str = "You can say give me a tip to hear a leadership tip, or say play the quiz \
     to answer a question. When a question has several answers, you can give them one at a time.";
pub const GOODBYE: &str = "Thanks for leading with Great Leader. Goodbye!";
pub const APOLOGY: &str = "Sorry, something went wrong on my side. Please try again.";

/// Join items the way they read aloud: `"a, b, and c"`.
///
/// Two items keep the comma as well (`"a, and b"`); a single item is returned
/// unchanged and no items give an empty string.
#[must_use]
pub fn join_naturally<S: AsRef<str>>(items: &[S]) -> String {
    let mut joined = String::new();
    let len = items.len();

    for (i, item) in items.iter().enumerate() {
        joined.push_str(item.as_ref());
        if i + 2 < len {
            joined.push_str(", ");
        } else if i + 2 == len {
            joined.push_str(", and ");
        }
    }

    joined
}

/// Prompt for the answers still owed on a multi-turn question.
#[must_use]
pub fn need_more_answers(missing: usize) -> String {
    match missing {
        1 => "I need one more answer.".to_owned(),
        n => format!("I need {n} more answers."),
    }
}

/// Summary of a graded question.
#[must_use]
pub fn grade_summary(report: &GradeReport) -> String {
    if report.all_correct {
        return ALL_CORRECT.to_owned();
    }

    if let ([wrong], [right]) = (report.incorrect.as_slice(), report.missing.as_slice()) {
        return format!("Sorry, {wrong} is not correct. The correct answer is {right}.");
    }

    let correct = report.correct_submissions();
    let mut sentences = Vec::with_capacity(3);

    match report.incorrect.len() {
        0 => {}
        1 => sentences.push(format!("Sorry, {} is not correct.", report.incorrect[0])),
        _ => sentences.push(format!(
            "Sorry, {} are not correct.",
            join_naturally(&report.incorrect)
        )),
    }

    if correct.is_empty() {
        sentences.push(format!(
            "The answers I was looking for were {}.",
            join_naturally(&report.missing)
        ));
    } else {
        sentences.push(format!("You did get {} right.", join_naturally(&correct)));
        if !report.missing.is_empty() && report.incorrect.is_empty() {
            sentences.push(format!(
                "I was also looking for {}.",
                join_naturally(&report.missing)
            ));
        }
    }

    sentences.join(" ")
}

/// Spoken tip followed by the menu question.
#[must_use]
pub fn tip_speech(tip: &str) -> String {
    format!("{tip}. {TIP_FOLLOW_UP}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::{AnswerMatch, Grader};

    #[test]
    fn join_matches_spoken_lists() {
        assert_eq!(join_naturally::<&str>(&[]), "");
        assert_eq!(join_naturally(&["x"]), "x");
        assert_eq!(join_naturally(&["x", "y"]), "x, and y");
        assert_eq!(join_naturally(&["x", "y", "z"]), "x, y, and z");
        assert_eq!(join_naturally(&["w", "x", "y", "z"]), "w, x, y, and z");
    }

    #[test]
    fn need_more_wording() {
        assert_eq!(need_more_answers(1), "I need one more answer.");
        assert_eq!(need_more_answers(2), "I need 2 more answers.");
    }

    #[test]
    fn all_correct_is_affirmed() {
        let report = Grader::default().grade(&["a"], &["a".to_owned()]);
        assert_eq!(grade_summary(&report), ALL_CORRECT);
    }

    #[test]
    fn single_slip_names_the_right_answer() {
        let report = Grader::default().grade(&["charisma"], &["humility".to_owned()]);
        assert_eq!(
            grade_summary(&report),
            "Sorry, charisma is not correct. The correct answer is humility."
        );
    }

    #[test]
    fn several_slips_list_wrong_and_right() {
        let report = GradeReport {
            all_correct: false,
            correct: vec![AnswerMatch {
                submitted: "impact".into(),
                expected: "impact".into(),
            }],
            incorrect: vec!["vision".into(), "budget".into()],
            missing: vec!["situation".into(), "behavior".into()],
        };

        assert_eq!(
            grade_summary(&report),
            "Sorry, vision, and budget are not correct. You did get impact right."
        );
    }

    #[test]
    fn repeated_answer_without_missing() {
        let report = Grader::default().grade(&["a", "a"], &["a".to_owned()]);
        assert_eq!(
            grade_summary(&report),
            "Sorry, a is not correct. You did get a right."
        );
    }

    #[test]
    fn nothing_right_names_expected_answers() {
        let report = Grader::default().grade(&["x", "y"], &["alpha".to_owned(), "beta".to_owned()]);
        assert_eq!(
            grade_summary(&report),
            "Sorry, x, and y are not correct. The answers I was looking for were alpha, and beta."
        );
    }

    #[test]
    fn tip_speech_appends_menu() {
        assert_eq!(
            tip_speech("Listen first"),
            "Listen first. Would you like another fact or the quiz?"
        );
    }
}
