//! Urlencoded form bodies - request types for the page handlers.
//!
//! Field names match the HTML forms (`enteredPassword`, `postTitle`, ...),
//! so the serde renames are part of the wire contract.

use serde::{Deserialize, Serialize};

/// Minimum password length accepted at signup.
pub const PASSWORD_MIN: usize = 6;

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Body of `POST /signup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
    #[serde(rename = "enteredPassword")]
    pub entered_password: String,
}

impl SignupForm {
    /// Validate the form, collecting every applicable error.
    ///
    /// Both checks always run; a short mismatched password reports two
    /// messages, not just the first.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.password != self.entered_password {
            errors.push("Password didn't match!".to_string());
        }
        if self.password.len() < PASSWORD_MIN {
            errors.push("Password should be at least 6 characters".to_string());
        }

        errors
    }
}

/// Body of `POST /compose`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeForm {
    #[serde(rename = "postTitle")]
    pub post_title: String,
    #[serde(rename = "postBody")]
    pub post_body: String,
}

/// Body of `POST /edit/{postId}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditForm {
    #[serde(rename = "postTitle")]
    pub post_title: String,
    #[serde(rename = "postBody")]
    pub post_body: String,
}

/// Body of `POST /delete`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteForm {
    #[serde(rename = "deletedPost")]
    pub deleted_post: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(password: &str, entered: &str) -> SignupForm {
        SignupForm {
            username: "a@b.com".to_string(),
            password: password.to_string(),
            entered_password: entered.to_string(),
        }
    }

    #[test]
    fn valid_signup_passes() {
        assert!(form("abcdef", "abcdef").validate().is_empty());
    }

    #[test]
    fn mismatch_is_reported() {
        let errors = form("abcdefg", "abcdefh").validate();
        assert_eq!(errors, vec!["Password didn't match!".to_string()]);
    }

    #[test]
    fn short_password_is_reported() {
        let errors = form("abc", "abc").validate();
        assert_eq!(
            errors,
            vec!["Password should be at least 6 characters".to_string()]
        );
    }

    #[test]
    fn short_and_mismatched_accumulate_both_errors() {
        let errors = form("abc", "abd").validate();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&"Password didn't match!".to_string()));
        assert!(errors.contains(&"Password should be at least 6 characters".to_string()));
    }

    #[test]
    fn boundary_length_is_accepted() {
        // Exactly six characters is the minimum, not below it.
        assert!(form("sixsix", "sixsix").validate().is_empty());
        assert!(!form("five5", "five5").validate().is_empty());
    }

    #[test]
    fn wire_field_names_follow_the_html_forms() {
        let form: SignupForm =
            serde_json::from_str(r#"{"username":"a","password":"b","enteredPassword":"c"}"#)
                .unwrap();
        assert_eq!(form.entered_password, "c");

        let form: DeleteForm = serde_json::from_str(r#"{"deletedPost":"abc"}"#).unwrap();
        assert_eq!(form.deleted_post, "abc");
    }
}
