/// Трейт для корня агрегата
///
/// Определяет идентичность записи и статические метаданные, по которым
/// строятся пути REST API и подписи в интерфейсе.
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id;

    /// Получить ID записи
    fn id(&self) -> &Self::Id;

    /// Имя коллекции в хранилище, оно же сегмент пути `/api/{collection}`
    fn collection_name() -> &'static str;

    /// Название одного элемента для UI
    fn element_name() -> &'static str;
}
