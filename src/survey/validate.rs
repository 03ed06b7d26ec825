use crate::models::response::{Answer, AnswerSheet};
use crate::survey::questions::{questions, QuestionKind, RANK_SLOTS};
use std::collections::BTreeSet;
use thiserror::Error;

/// Validation failures for a filled-in answer sheet.
///
/// Display strings are the user-facing messages shown in the survey form's
/// message area.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("请完成所有题目后提交。")]
    Incomplete,

    #[error("请选择你想去的三个Family的排名。")]
    MissingRank,

    #[error("请不要在三个排名中选择相同的Family。")]
    DuplicateRank,

    #[error("答案包含无效选项。")]
    InvalidOption,
}

/// Check a full answer sheet against the survey definition.
///
/// Questions are checked in display order and the first failure wins, so a
/// sheet missing q3 reports `Incomplete` even if q16 also has problems.
/// Enforced here, before submission; the backend does not re-validate.
pub fn validate_answers(answers: &AnswerSheet) -> Result<(), AnswerError> {
    for question in questions() {
        let answer = answers.get(&question.key());

        match question.kind {
            QuestionKind::Single => match answer {
                Some(Answer::Choice(code)) if question.has_option(code) => {}
                Some(Answer::Choice(_)) | Some(Answer::Choices(_)) => {
                    return Err(AnswerError::InvalidOption)
                }
                None => return Err(AnswerError::Incomplete),
            },
            QuestionKind::Multi => match answer {
                Some(Answer::Choices(codes)) if !codes.is_empty() => {
                    if !codes.iter().all(|code| question.has_option(code)) {
                        return Err(AnswerError::InvalidOption);
                    }
                }
                Some(Answer::Choices(_)) | None => return Err(AnswerError::Incomplete),
                Some(Answer::Choice(_)) => return Err(AnswerError::InvalidOption),
            },
            QuestionKind::Ranked => match answer {
                Some(Answer::Choices(ranks)) => {
                    // All three slots must be filled with real options
                    if ranks.len() != RANK_SLOTS || ranks.iter().any(|code| code.is_empty()) {
                        return Err(AnswerError::MissingRank);
                    }

                    if !ranks.iter().all(|code| question.has_option(code)) {
                        return Err(AnswerError::InvalidOption);
                    }

                    let distinct: BTreeSet<&String> = ranks.iter().collect();
                    if distinct.len() != ranks.len() {
                        return Err(AnswerError::DuplicateRank);
                    }
                }
                Some(Answer::Choice(_)) => return Err(AnswerError::InvalidOption),
                None => return Err(AnswerError::MissingRank),
            },
        }
    }

    Ok(())
}

#[cfg(test)]
pub(crate) fn complete_answer_sheet() -> AnswerSheet {
    let mut answers = AnswerSheet::new();
    for id in 1..=14u8 {
        answers.insert(format!("q{id}"), Answer::Choice("A".to_string()));
    }
    answers.insert(
        "q15".to_string(),
        Answer::Choices(vec!["B".to_string(), "I".to_string()]),
    );
    answers.insert(
        "q16".to_string(),
        Answer::Choices(vec!["C".to_string(), "A".to_string(), "D".to_string()]),
    );
    answers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::response::Answer;

    #[test]
    fn test_complete_sheet_is_valid() {
        assert_eq!(validate_answers(&complete_answer_sheet()), Ok(()));
    }

    #[test]
    fn test_missing_single_choice_is_incomplete() {
        let mut answers = complete_answer_sheet();
        answers.remove("q7");
        assert_eq!(validate_answers(&answers), Err(AnswerError::Incomplete));
    }

    #[test]
    fn test_empty_multi_choice_is_incomplete() {
        let mut answers = complete_answer_sheet();
        answers.insert("q15".to_string(), Answer::Choices(vec![]));
        assert_eq!(validate_answers(&answers), Err(AnswerError::Incomplete));
    }

    #[test]
    fn test_missing_third_rank() {
        let mut answers = complete_answer_sheet();
        answers.insert(
            "q16".to_string(),
            Answer::Choices(vec!["A".to_string(), "B".to_string()]),
        );
        assert_eq!(validate_answers(&answers), Err(AnswerError::MissingRank));
    }

    #[test]
    fn test_empty_rank_slot() {
        let mut answers = complete_answer_sheet();
        answers.insert(
            "q16".to_string(),
            Answer::Choices(vec!["A".to_string(), String::new(), "B".to_string()]),
        );
        assert_eq!(validate_answers(&answers), Err(AnswerError::MissingRank));
    }

    #[test]
    fn test_duplicate_ranks() {
        let mut answers = complete_answer_sheet();
        answers.insert(
            "q16".to_string(),
            Answer::Choices(vec!["A".to_string(), "A".to_string(), "B".to_string()]),
        );
        assert_eq!(validate_answers(&answers), Err(AnswerError::DuplicateRank));
    }

    #[test]
    fn test_unknown_option_code() {
        let mut answers = complete_answer_sheet();
        answers.insert("q3".to_string(), Answer::Choice("Z".to_string()));
        assert_eq!(validate_answers(&answers), Err(AnswerError::InvalidOption));
    }

    #[test]
    fn test_rank_code_outside_option_set() {
        let mut answers = complete_answer_sheet();
        answers.insert(
            "q16".to_string(),
            Answer::Choices(vec!["A".to_string(), "B".to_string(), "E".to_string()]),
        );
        assert_eq!(validate_answers(&answers), Err(AnswerError::InvalidOption));
    }

    #[test]
    fn test_wrong_shape_for_single_choice() {
        let mut answers = complete_answer_sheet();
        answers.insert(
            "q1".to_string(),
            Answer::Choices(vec!["A".to_string()]),
        );
        assert_eq!(validate_answers(&answers), Err(AnswerError::InvalidOption));
    }

    #[test]
    fn test_first_failure_wins() {
        // Both q2 is missing and q16 has duplicates; q2 reports first
        let mut answers = complete_answer_sheet();
        answers.remove("q2");
        answers.insert(
            "q16".to_string(),
            Answer::Choices(vec!["A".to_string(), "A".to_string(), "B".to_string()]),
        );
        assert_eq!(validate_answers(&answers), Err(AnswerError::Incomplete));
    }
}
