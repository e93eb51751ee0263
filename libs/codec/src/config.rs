//! Configuration boundary, §6. The INI-style config-file loader itself is
//! out of scope (§1 Non-goals); the codec only consumes this narrow lookup
//! surface so it stays a pure library.

/// What a `Message` needs from the external `ConfigFile` for one section.
pub trait ConfigSource {
    /// `u4`; values above 15 are a caller error.
    fn transport_specific(&self, section: &str) -> u8;
    fn domain_number(&self, section: &str) -> u8;
    fn spp(&self, section: &str) -> Option<u8>;
    fn active_key_id(&self, section: &str) -> Option<u32>;
}

/// Applies `cfg`'s values for `section` onto a session, the way
/// `use_config(cfg, section)` is described in §6.
pub fn apply_config(session: &mut ptpmgmt_types::MsgParams, cfg: &dyn ConfigSource, section: &str) {
    session.transport_specific = cfg.transport_specific(section) & 0x0f;
    session.domain_number = cfg.domain_number(section);
}
