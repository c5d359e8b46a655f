//! Pure converters from wire DTOs into domain records

use crate::types::{OperationUser, OperationUserGroup, UserGroupOperationRole, UserOperationRole};

use super::dto::{UserGroupOperationRoleDto, UserOperationRoleDto};

pub fn user_operation_role_from_dto(dto: UserOperationRoleDto) -> UserOperationRole {
    UserOperationRole {
        user: OperationUser {
            slug: dto.user.slug,
            first_name: dto.user.first_name,
            last_name: dto.user.last_name,
        },
        role: dto.role,
    }
}

pub fn user_group_operation_role_from_dto(dto: UserGroupOperationRoleDto) -> UserGroupOperationRole {
    UserGroupOperationRole {
        user_group: OperationUserGroup {
            slug: dto.user_group.slug,
            name: dto.user_group.name,
        },
        role: dto.role,
    }
}
