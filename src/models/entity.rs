// src/models/entity.rs

use std::fmt::{Debug, Display};

use serde::{de::DeserializeOwned, Serialize};

use crate::{common::error::AppError, models::notice::DeleteWording};

/// Contador monotônico para chaves numéricas.
///
/// Nunca recua: uma chave removida não é reaproveitada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn starting_at(next: u64) -> Self {
        Self { next: next.max(1) }
    }

    /// Continua a partir da maior chave já existente (ou 1 se não houver nenhuma).
    pub fn after<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let next = existing.into_iter().max().map_or(1, |max| max.saturating_add(1));
        Self::starting_at(next)
    }

    pub fn peek(&self) -> u64 {
        self.next
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }
}

/// Buffer de formulário: recebe os valores crus digitados pelo usuário.
pub trait FormInput {
    /// Nomes aceitos por `set_field`, na ordem do formulário.
    const FIELDS: &'static [&'static str];

    fn set_field(&mut self, field: &str, raw: &str) -> Result<(), AppError>;
}

/// Um registro gerenciado por uma página de CRUD.
pub trait Entity: Clone + Debug + Serialize + Send + Sync + 'static {
    type Key: Clone + Debug + Display + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static;
    type Draft: Clone + Debug + Default + Serialize + DeserializeOwned + FormInput + Send + Sync + 'static;

    /// Nome singular exibido nas mensagens ("Client", "Product", ...)
    const LABEL: &'static str;

    const DELETE_WORDING: DeleteWording = DeleteWording::Standard;

    fn key(&self) -> &Self::Key;

    /// Nome mostrado na confirmação de exclusão.
    fn display_name(&self) -> &str;

    fn search_fields(&self) -> Vec<&str>;

    fn to_draft(&self) -> Self::Draft;

    fn from_draft(key: Self::Key, draft: Self::Draft) -> Self;

    /// Substitui todos os campos exceto a chave.
    fn apply_draft(&mut self, draft: Self::Draft);

    fn allocate_key(draft: &Self::Draft, ids: &mut IdSequence) -> Result<Self::Key, AppError>;

    /// Chave numérica usada para posicionar o `IdSequence` no seed.
    fn sequence_hint(&self) -> Option<u64> {
        None
    }

    fn matches(&self, needle_lowercase: &str) -> bool {
        needle_lowercase.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle_lowercase))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_continues_after_highest_key() {
        let mut ids = IdSequence::after([3, 1, 2]);
        assert_eq!(ids.next_id(), 4);
        assert_eq!(ids.next_id(), 5);
        assert_eq!(ids.peek(), 6);
    }

    #[test]
    fn empty_sequence_starts_at_one() {
        let mut ids = IdSequence::after(std::iter::empty());
        assert_eq!(ids.next_id(), 1);
        assert_eq!(IdSequence::starting_at(0).peek(), 1);
    }
}
