use agora_models::v0::*;
use agora_result::Error;

impl From<crate::ReportCategory> for ReportCategory {
    fn from(value: crate::ReportCategory) -> Self {
        ReportCategory {
            id: value.id,
            name: value.name,
            title: value.title,
            description: value.description,
        }
    }
}

impl From<crate::Report> for Report {
    fn from(value: crate::Report) -> Self {
        Report {
            id: value.id,
            reporter_id: value.reporter_id,
            object_type: value.object_type,
            object_id: value.object_id,
            category_id: value.category_id,
            description: value.description,
            created_at: value.created_at,
        }
    }
}

impl From<crate::ModeratedObject> for ModeratedObject {
    fn from(value: crate::ModeratedObject) -> Self {
        ModeratedObject {
            id: value.id,
            object_id: value.object_id,
            object_type: value.object_type,
            status: value.status,
            category: value.category,
            community: value.community,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<crate::ModeratedObjectLog> for ModeratedObjectLog {
    fn from(value: crate::ModeratedObjectLog) -> Self {
        ModeratedObjectLog {
            id: value.id,
            moderated_object_id: value.moderated_object_id,
            actor_id: value.actor_id,
            previous_status: value.previous_status,
            status: value.status,
            created_at: value.created_at,
        }
    }
}

impl TryFrom<OptionsFetchModeratedObjects> for crate::ModeratedObjectFilter {
    type Error = Error;

    fn try_from(value: OptionsFetchModeratedObjects) -> Result<Self, Self::Error> {
        let statuses = value
            .statuses()
            .map_err(|error| create_error!(FailedValidation { error }))?;
        let object_types = value
            .types()
            .map_err(|error| create_error!(FailedValidation { error }))?;

        Ok(crate::ModeratedObjectFilter {
            statuses,
            object_types,
            before: value.before,
            limit: value.limit,
        })
    }
}
