#[async_trait]
pub trait ModerationQuery {
    // * For calculating moderator role

    /// Is our perspective user a global moderator?
    async fn are_we_global_moderator(&mut self) -> bool;

    /// Get the community currently selected, if any
    ///
    /// This is the community scope of the selected case or listing.
    async fn get_selected_community(&mut self) -> Option<String>;

    /// Is our perspective user staff (owner, administrator or moderator)
    /// of the currently selected community?
    async fn are_we_community_staff(&mut self) -> bool;
}
