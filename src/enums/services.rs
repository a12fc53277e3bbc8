//! Target services a number can be bought for.

use super::wire::wire_enum;

wire_enum! {
    /// GetAlts service identifiers.
    ///
    /// Each service is the online platform the purchased number will be
    /// verified against.
    pub enum Service("service") {
        /// Microsoft (code: "ms").
        Microsoft => "ms",
        /// Google (code: "go").
        Google => "go",
        /// GMail (code: "gm").
        GMail => "gm",
        /// Yahoo (code: "yh").
        Yahoo => "yh",
        /// LinkedIn (code: "ln").
        LinkedIn => "ln",
        /// Uber (code: "ub").
        Uber => "ub",
        /// WeChat (code: "wc").
        WeChat => "wc",
        /// Instagram (code: "ig").
        Instagram => "ig",
        /// LINE messenger (code: "lm").
        LineMessenger => "lm",
        /// Telegram (code: "tg").
        Telegram => "tg",
        /// VK (code: "vk").
        VkCom => "vk",
        /// YouTube (code: "yt").
        YouTube => "yt",
        /// Facebook (code: "fb").
        Facebook => "fb",
        /// Steam (code: "st").
        Steam => "st",
        /// Yandex (code: "ya").
        Yandex => "ya",
        /// WhatsApp (code: "wp").
        Whatsapp => "wp",
        /// Tinder (code: "ti").
        Tinder => "ti",
        /// Twitter (code: "tw").
        Twitter => "tw",
        /// Any service not listed above (code: "ot").
        AnyOther => "ot",
    }
}
