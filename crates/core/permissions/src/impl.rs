use crate::{ModerationQuery, ModeratorRole};

/// Calculate the moderation role we hold in the selected scope
pub async fn calculate_moderator_role<P: ModerationQuery>(query: &mut P) -> ModeratorRole {
    if query.are_we_global_moderator().await {
        return ModeratorRole::GlobalModerator;
    }

    if let Some(community) = query.get_selected_community().await {
        if query.are_we_community_staff().await {
            return ModeratorRole::CommunityStaff(community);
        }
    }

    ModeratorRole::None
}
