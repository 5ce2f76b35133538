use crate::model::employee::EmployeeDto;

/// Employee without the stored password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub status: i32,
}

impl Employee {
    pub fn from_entity(entity: entity::employee::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            username: entity.username,
            status: entity.status,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.status == 1
    }

    pub fn into_dto(self) -> EmployeeDto {
        EmployeeDto {
            id: self.id,
            name: self.name,
            username: self.username,
            status: self.status,
        }
    }
}
