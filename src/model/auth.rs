use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignInDto {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignUpDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful response of both sign in and sign up
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessTokenDto {
    pub access_token: String,
}
