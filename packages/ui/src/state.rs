//! # Page state
//!
//! The landing page keeps three independent pieces of transient state, each
//! owned by the component that renders it:
//!
//! | Type | Owner | Transitions |
//! |------|-------|-------------|
//! | [`MenuState`] | `Navbar` | `Closed <-> Open` via [`MenuState::toggle`], any state `-> Closed` via [`MenuState::close`] |
//! | [`OtpField`] | each `LoginPanel` | `Hidden -> Shown` via [`OtpField::reveal`], no way back |
//!
//! Nothing here is persisted; a reload starts from the defaults again.
//! What a login form shows is derived from its [`OtpField`] by [`login_fields`].

/// Mobile navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Following a link closes the menu, whatever its state.
    #[must_use]
    pub fn close(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

/// Visibility of the OTP input in a login form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OtpField {
    #[default]
    Hidden,
    Shown,
}

impl OtpField {
    /// One-way: once shown, the field stays shown.
    #[must_use]
    pub fn reveal(self) -> Self {
        OtpField::Shown
    }

    pub fn is_shown(self) -> bool {
        self == OtpField::Shown
    }
}

/// Who a login panel is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Tenant,
    Owner,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Tenant => "tenant",
            Role::Owner => "owner",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Role::Tenant => "Tenant Login",
            Role::Owner => "Owner Login",
        }
    }
}

/// An input rendered inside a login form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
    Otp,
}

impl LoginField {
    pub fn name(self) -> &'static str {
        match self {
            LoginField::Username => "username",
            LoginField::Password => "password",
            LoginField::Otp => "otp",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            LoginField::Password => "password",
            LoginField::Username | LoginField::Otp => "text",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            LoginField::Username => "Username",
            LoginField::Password => "Password",
            LoginField::Otp => "Enter OTP",
        }
    }
}

/// The inputs a login form shows, in render order.
pub fn login_fields(otp: OtpField) -> Vec<LoginField> {
    let mut fields = vec![LoginField::Username, LoginField::Password];
    if otp.is_shown() {
        fields.push(LoginField::Otp);
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert!(!MenuState::default().is_open());
        assert!(!OtpField::default().is_shown());
        assert_eq!(
            login_fields(OtpField::default()),
            vec![LoginField::Username, LoginField::Password]
        );
    }

    #[test]
    fn test_menu_toggle_parity() {
        let mut menu = MenuState::default();
        for clicks in 1..=6 {
            menu = menu.toggle();
            assert_eq!(menu.is_open(), clicks % 2 == 1, "after {clicks} clicks");
        }
    }

    #[test]
    fn test_menu_close_is_idempotent() {
        assert_eq!(MenuState::Open.close(), MenuState::Closed);
        assert_eq!(MenuState::Closed.close(), MenuState::Closed);
        assert_eq!(MenuState::Open.close().close(), MenuState::Closed);
    }

    #[test]
    fn test_reveal_adds_exactly_one_field() {
        let hidden = login_fields(OtpField::Hidden);
        let shown = login_fields(OtpField::Hidden.reveal());
        assert_eq!(shown.len(), hidden.len() + 1);
        assert_eq!(shown.last(), Some(&LoginField::Otp));
    }

    #[test]
    fn test_reveal_has_no_way_back() {
        let otp = OtpField::Hidden.reveal();
        assert_eq!(otp.reveal(), OtpField::Shown);
        assert_eq!(login_fields(otp.reveal()), login_fields(otp));
    }

    #[test]
    fn test_panels_are_independent() {
        let tenant = OtpField::default().reveal();
        let owner = OtpField::default();
        assert!(tenant.is_shown());
        assert!(!owner.is_shown());
        assert_eq!(login_fields(owner).len(), 2);
    }

    #[test]
    fn test_otp_input_is_plain_text() {
        assert_eq!(LoginField::Otp.input_type(), "text");
        assert_eq!(LoginField::Password.input_type(), "password");
        assert_eq!(LoginField::Otp.placeholder(), "Enter OTP");
    }
}
