/// Lossless field-by-field conversion between the three representations of
/// a resource: the stored entity, the output DTO returned to clients, and
/// the modify DTO accepted for create/update.
///
/// Implementations are stateless unit structs; all conversions are pure.
pub trait ResourceMapper {
    type Entity;
    type Dto;
    type ModifyDto;

    /// Resource display name used in error messages
    const RESOURCE: &'static str;

    /// entity -> output representation
    fn to_dto(entity: Self::Entity) -> Self::Dto;

    /// input representation -> entity. `id` is `None` for create; update
    /// passes the existing id to rebuild the entity as a full replacement.
    fn from_modify(id: Option<i64>, modify: Self::ModifyDto) -> Self::Entity;

    /// entity -> input representation (edit-form prefill)
    fn to_modify(entity: Self::Entity) -> Self::ModifyDto;
}
