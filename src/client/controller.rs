//! The linear UI flow behind the survey page.
//!
//! States move `Intro -> Auth -> Survey -> Submitted`, each transition
//! triggered by an explicit user action. The session marker is plain state
//! owned by the caller and passed into submission, so the whole flow is
//! testable without a browser.

use crate::client::api::SurveyApi;
use crate::models::response::AnswerSheet;
use crate::survey::validate::validate_answers;

pub const MSG_NEED_LOGIN: &str = "请先登录。";
pub const MSG_ENTER_CREDENTIALS: &str = "请输入账号和密码。";
pub const MSG_BAD_USERNAME_FORMAT: &str = "账号格式应为“姓名-ID”。";
pub const MSG_REGISTERED: &str = "注册成功，请前往登录。";
pub const MSG_SUBMITTED: &str = "感谢您的填写！";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthTab {
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Intro,
    Auth(AuthTab),
    Survey,
    Submitted,
}

/// The "current user" marker for one browser session.
///
/// Not a security token; it only tells the submission routine whose name to
/// attach. It lives for the session and is dropped with it.
#[derive(Debug, Default, Clone)]
pub struct Session {
    current_user: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, username: impl Into<String>) {
        self.current_user = Some(username.into());
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    pub fn clear(&mut self) {
        self.current_user = None;
    }
}

/// Exactly one separator splitting a non-empty name part from a non-empty id
/// part (`name-id`).
pub fn valid_username_format(username: &str) -> bool {
    let mut parts = username.split('-');
    matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(name), Some(id), None) if !name.is_empty() && !id.is_empty()
    )
}

pub struct Controller {
    api: SurveyApi,
    state: UiState,
}

impl Controller {
    pub fn new(api: SurveyApi) -> Self {
        Self {
            api,
            state: UiState::Intro,
        }
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    /// Click-through from the intro cover to the auth forms.
    pub fn enter_site(&mut self) {
        if self.state == UiState::Intro {
            self.state = UiState::Auth(AuthTab::Login);
        }
    }

    pub fn switch_tab(&mut self, tab: AuthTab) {
        if matches!(self.state, UiState::Auth(_)) {
            self.state = UiState::Auth(tab);
        }
    }

    /// Register a new account. Validates locally before any network call;
    /// on success the UI flips back to the login tab.
    pub async fn register(&mut self, username: &str, password: &str) -> Result<String, String> {
        let username = username.trim();

        if username.is_empty() || password.is_empty() {
            return Err(MSG_ENTER_CREDENTIALS.to_string());
        }

        if !valid_username_format(username) {
            return Err(MSG_BAD_USERNAME_FORMAT.to_string());
        }

        self.api.register(username, password).await?;

        self.switch_tab(AuthTab::Login);
        Ok(MSG_REGISTERED.to_string())
    }

    /// Log in and record the session identity on success.
    pub async fn login(
        &mut self,
        session: &mut Session,
        username: &str,
        password: &str,
    ) -> Result<(), String> {
        let username = username.trim();

        if username.is_empty() || password.is_empty() {
            return Err(MSG_ENTER_CREDENTIALS.to_string());
        }

        self.api.login(username, password).await?;

        session.sign_in(username);
        self.state = UiState::Survey;
        Ok(())
    }

    /// Validate and submit a filled-in survey.
    ///
    /// Requires an established session identity and a sheet satisfying every
    /// question's invariant; both checks run before any network call.
    pub async fn submit_survey(
        &mut self,
        session: &Session,
        answers: &AnswerSheet,
    ) -> Result<String, String> {
        let Some(username) = session.current_user() else {
            return Err(MSG_NEED_LOGIN.to_string());
        };

        validate_answers(answers).map_err(|e| e.to_string())?;

        self.api.submit_survey(username, answers).await?;

        self.state = UiState::Submitted;
        Ok(MSG_SUBMITTED.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::response::Answer;
    use crate::survey::validate::{complete_answer_sheet, AnswerError};

    // Nothing should try to reach this address; the controller must fail
    // locally before any network call in these tests.
    fn controller() -> Controller {
        Controller::new(SurveyApi::new("http://127.0.0.1:9").unwrap())
    }

    #[test]
    fn test_state_flow() {
        let mut controller = controller();
        assert_eq!(controller.state(), UiState::Intro);

        controller.enter_site();
        assert_eq!(controller.state(), UiState::Auth(AuthTab::Login));

        controller.switch_tab(AuthTab::Register);
        assert_eq!(controller.state(), UiState::Auth(AuthTab::Register));

        controller.switch_tab(AuthTab::Login);
        assert_eq!(controller.state(), UiState::Auth(AuthTab::Login));
    }

    #[test]
    fn test_tab_switch_only_in_auth() {
        let mut controller = controller();
        controller.switch_tab(AuthTab::Register);
        assert_eq!(controller.state(), UiState::Intro);
    }

    #[test]
    fn test_username_format() {
        assert!(valid_username_format("张三-1234"));
        assert!(valid_username_format("a-b"));

        assert!(!valid_username_format("nodash"));
        assert!(!valid_username_format("-1234"));
        assert!(!valid_username_format("name-"));
        assert!(!valid_username_format("a-b-c"));
        assert!(!valid_username_format(""));
    }

    #[tokio::test]
    async fn test_register_rejects_bad_input_before_network() {
        let mut controller = controller();

        let err = controller.register("", "pw").await.unwrap_err();
        assert_eq!(err, MSG_ENTER_CREDENTIALS);

        let err = controller.register("nodash", "pw").await.unwrap_err();
        assert_eq!(err, MSG_BAD_USERNAME_FORMAT);
    }

    #[tokio::test]
    async fn test_login_requires_credentials() {
        let mut controller = controller();
        let mut session = Session::new();

        let err = controller
            .login(&mut session, "alice-1234", "")
            .await
            .unwrap_err();
        assert_eq!(err, MSG_ENTER_CREDENTIALS);
        assert!(session.current_user().is_none());
    }

    #[tokio::test]
    async fn test_submit_requires_session() {
        let mut controller = controller();
        let session = Session::new();

        let err = controller
            .submit_survey(&session, &complete_answer_sheet())
            .await
            .unwrap_err();
        assert_eq!(err, MSG_NEED_LOGIN);
    }

    #[tokio::test]
    async fn test_submit_rejects_missing_rank_before_network() {
        let mut controller = controller();
        let mut session = Session::new();
        session.sign_in("alice-1234");

        let mut answers = complete_answer_sheet();
        answers.insert(
            "q16".to_string(),
            Answer::Choices(vec!["A".to_string(), "B".to_string()]),
        );

        let err = controller.submit_survey(&session, &answers).await.unwrap_err();
        assert_eq!(err, AnswerError::MissingRank.to_string());
    }

    #[tokio::test]
    async fn test_submit_rejects_duplicate_ranks_before_network() {
        let mut controller = controller();
        let mut session = Session::new();
        session.sign_in("alice-1234");

        let mut answers = complete_answer_sheet();
        answers.insert(
            "q16".to_string(),
            Answer::Choices(vec!["A".to_string(), "A".to_string(), "B".to_string()]),
        );

        let err = controller.submit_survey(&session, &answers).await.unwrap_err();
        assert_eq!(err, AnswerError::DuplicateRank.to_string());
    }

    #[test]
    fn test_session_clear() {
        let mut session = Session::new();
        session.sign_in("alice-1234");
        assert_eq!(session.current_user(), Some("alice-1234"));

        session.clear();
        assert!(session.current_user().is_none());
    }
}
