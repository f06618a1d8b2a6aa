use super::{FieldErrors, FieldRule, FormState, FormValues};
use crate::editor::{sanitize_html, EditorBridge};
use crate::models::{Credentials, NewAccount, PostDraft};

/// Minimum password length the backend accepts for new accounts.
pub const MIN_PASSWORD_LEN: u64 = 8;

pub struct LoginForm;

impl LoginForm {
    pub const EMAIL: &'static str = "email";
    pub const PASSWORD: &'static str = "password";

    pub fn build() -> FormState {
        let mut form = FormState::new();
        form.register(Self::EMAIL, vec![FieldRule::required(), FieldRule::email()])
            .register(Self::PASSWORD, vec![FieldRule::required()]);
        form
    }

    pub fn submit(form: &mut FormState) -> Result<Credentials, FieldErrors> {
        form.handle_submit_with(Self::collect)
    }

    fn collect(mut values: FormValues) -> Credentials {
        Credentials {
            email: values.take(Self::EMAIL),
            password: values.take(Self::PASSWORD),
        }
    }
}

pub struct SignupForm;

impl SignupForm {
    pub const NAME: &'static str = "name";
    pub const EMAIL: &'static str = "email";
    pub const PASSWORD: &'static str = "password";

    pub fn build() -> FormState {
        let mut form = FormState::new();
        form.register(Self::NAME, vec![FieldRule::required()])
            .register(Self::EMAIL, vec![FieldRule::required(), FieldRule::email()])
            .register(
                Self::PASSWORD,
                vec![FieldRule::required(), FieldRule::min_length(MIN_PASSWORD_LEN)],
            );
        form
    }

    pub fn submit(form: &mut FormState) -> Result<NewAccount, FieldErrors> {
        form.handle_submit_with(|mut values| NewAccount {
            email: values.take(Self::EMAIL),
            password: values.take(Self::PASSWORD),
            name: values.take(Self::NAME),
        })
    }
}

/// Title input plus a rich-text body fed by an [`EditorBridge`].
pub struct PostForm;

impl PostForm {
    pub const TITLE: &'static str = "title";

    pub fn build(content: &EditorBridge, default_content: &str) -> FormState {
        let mut form = FormState::new();
        form.register(Self::TITLE, vec![FieldRule::required()]);
        content.attach(&mut form, vec![FieldRule::required()], default_content);
        form
    }

    /// The body is sanitized before it leaves the form.
    pub fn submit(form: &mut FormState, content: &EditorBridge) -> Result<PostDraft, FieldErrors> {
        form.handle_submit_with(|mut values| PostDraft {
            title: values.take(Self::TITLE),
            content: sanitize_html(&values.take(content.field())),
        })
    }
}
