//! Activation statuses reported by the service and the actions that change them.

use super::wire::wire_enum;

wire_enum! {
    /// Remote lifecycle state of an activation.
    ///
    /// Transitions are driven entirely by the service; the client only checks
    /// that the reported value is one it knows.
    pub enum Status("status") {
        /// Number bought, nothing requested yet.
        Ready => "READY",
        /// Number confirmed ready to receive a code.
        AccessReady => "ACCESS_READY",
        /// Waiting for an SMS to arrive.
        WaitingForCode => "STATUS_WAIT_CODE",
        /// Activation cancelled.
        Cancelled => "ACCESS_CANCEL",
        /// Code received and confirmed.
        AccessConfirmGet => "ACCESS_CONFIRM_GET",
        /// Activation completed.
        StatusOk => "STATUS_OK",
    }
}

impl Status {
    /// Whether the activation is closed and should no longer be used.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Cancelled | Status::StatusOk)
    }
}

wire_enum! {
    /// Status change requested through `set_activation_status`.
    pub(crate) enum Action("action") {
        SendSms => "SMS_SENT",
        Cancel => "CANCEL",
        End => "END",
        SendAnotherCode => "ONE_MORE_CODE",
        AlreadyUsed => "ALREADY_USED",
    }
}

impl Action {
    /// Value sent in the `status` query parameter.
    ///
    /// The service only accepts these in lowercase.
    pub(crate) fn query_value(&self) -> String {
        self.code().to_ascii_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_code() {
        assert_eq!(Status::from_code("READY").unwrap(), Status::Ready);
        assert_eq!(
            Status::from_code("STATUS_WAIT_CODE").unwrap(),
            Status::WaitingForCode
        );
        assert!(Status::from_code("ready").is_err());
        assert!(Status::from_code("STATUS_WAIT_RETRY").is_err());
    }

    #[test]
    fn test_status_is_terminal() {
        assert!(Status::Cancelled.is_terminal());
        assert!(Status::StatusOk.is_terminal());
        assert!(!Status::Ready.is_terminal());
        assert!(!Status::WaitingForCode.is_terminal());
    }

    #[test]
    fn test_action_query_value() {
        assert_eq!(Action::SendSms.query_value(), "sms_sent");
        assert_eq!(Action::Cancel.query_value(), "cancel");
        assert_eq!(Action::End.query_value(), "end");
        assert_eq!(Action::SendAnotherCode.query_value(), "one_more_code");
        assert_eq!(Action::AlreadyUsed.query_value(), "already_used");
    }

    #[test]
    fn test_action_codes_unique() {
        for (i, a) in Action::ALL.iter().enumerate() {
            for b in &Action::ALL[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
            assert_eq!(Action::from_code(a.code()).unwrap(), *a);
        }
    }
}
