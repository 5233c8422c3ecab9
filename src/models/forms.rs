use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetRequestForm {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordForm {
    pub email: String,
    // OTP code mailed by the reset-request endpoint
    pub seed: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct EditProfileForm {
    pub user_name: String,
    pub country: String,
    #[serde(default)]
    pub phone_number: Option<String>,
}
