use super::AuthSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    LoggedIn,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Startup profile check still running.
    Pending,
    Granted,
    /// Route to send the visitor to instead.
    Denied(&'static str),
}

impl Requirement {
    pub fn check(self, snapshot: &AuthSnapshot) -> Access {
        if snapshot.loading {
            return Access::Pending;
        }
        match self {
            Self::LoggedIn if snapshot.logged_in => Access::Granted,
            Self::LoggedIn => Access::Denied("/login"),
            Self::Admin if snapshot.is_admin() => Access::Granted,
            Self::Admin => Access::Denied("/"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::User;

    fn user(is_admin: bool) -> User {
        User {
            id: 7,
            name: "Sam".to_string(),
            email: "sam@cinehall.test".to_string(),
            is_admin,
        }
    }

    #[test]
    fn test_pending_while_loading() {
        let snapshot = AuthSnapshot::initial();
        assert_eq!(Requirement::LoggedIn.check(&snapshot), Access::Pending);
        assert_eq!(Requirement::Admin.check(&snapshot), Access::Pending);
    }

    #[test]
    fn test_anonymous_visitor_goes_to_login() {
        let snapshot = AuthSnapshot::logged_out();
        assert_eq!(Requirement::LoggedIn.check(&snapshot), Access::Denied("/login"));
        assert_eq!(Requirement::Admin.check(&snapshot), Access::Denied("/"));
    }

    #[test]
    fn test_admin_pages_need_admin_flag() {
        let member = AuthSnapshot::logged_in(user(false));
        assert_eq!(Requirement::LoggedIn.check(&member), Access::Granted);
        assert_eq!(Requirement::Admin.check(&member), Access::Denied("/"));

        let admin = AuthSnapshot::logged_in(user(true));
        assert_eq!(Requirement::Admin.check(&admin), Access::Granted);
    }
}
