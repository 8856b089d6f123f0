// src/db/collection.rs

use crate::{
    common::error::AppError,
    models::entity::{Entity, IdSequence},
};

/// Coleção em memória, na ordem de inserção.
#[derive(Debug, Clone)]
pub struct ManagedCollection<E: Entity> {
    records: Vec<E>,
    ids: IdSequence,
}

impl<E: Entity> Default for ManagedCollection<E> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<E: Entity> ManagedCollection<E> {
    pub fn new(seed: Vec<E>) -> Self {
        let ids = IdSequence::after(seed.iter().filter_map(E::sequence_hint));
        Self { records: seed, ids }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.records.iter()
    }

    pub fn get(&self, key: &E::Key) -> Option<&E> {
        self.records.iter().find(|record| record.key() == key)
    }

    pub fn contains(&self, key: &E::Key) -> bool {
        self.get(key).is_some()
    }

    /// Busca por substring sem diferenciar maiúsculas, preservando a ordem.
    /// O texto é usado como digitado, espaços inclusive.
    pub fn filter(&self, search: &str) -> Vec<&E> {
        let needle = search.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.matches(&needle))
            .collect()
    }

    pub fn insert(&mut self, draft: E::Draft) -> Result<&E, AppError> {
        let key = E::allocate_key(&draft, &mut self.ids)?;

        if self.contains(&key) {
            return Err(AppError::DuplicateKey {
                entity: E::LABEL,
                key: key.to_string(),
            });
        }

        self.records.push(E::from_draft(key, draft));
        let index = self.records.len() - 1;
        Ok(&self.records[index])
    }

    /// Troca os campos (menos a chave). Chave ausente não altera nada.
    pub fn replace(&mut self, key: &E::Key, draft: E::Draft) -> Option<&E> {
        let record = self.records.iter_mut().find(|record| record.key() == key)?;
        record.apply_draft(draft);
        Some(&*record)
    }

    pub fn remove(&mut self, key: &E::Key) -> Option<E> {
        let index = self.records.iter().position(|record| record.key() == key)?;
        Some(self.records.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::seed,
        models::{
            client::{Client, ClientDraft},
            subscription::{Subscription, SubscriptionDraft},
        },
    };

    fn client_draft(code: &str, name: &str) -> ClientDraft {
        ClientDraft {
            client_comp_code: code.into(),
            client_comp_name: name.into(),
            client_comp_short_name: String::new(),
            is_active: true,
        }
    }

    #[test]
    fn search_is_case_insensitive_and_ordered() {
        let clients = ManagedCollection::new(seed::clients());

        let hits = clients.filter("techsol");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].client_comp_short_name, "TechSol");

        let codes: Vec<_> = clients.filter("cl00").iter().map(|c| c.client_comp_id).collect();
        assert_eq!(codes, vec![1, 2, 3]);

        assert_eq!(clients.filter("").len(), 3);
        assert!(clients.filter("nobody").is_empty());
    }

    #[test]
    fn search_keeps_surrounding_whitespace() {
        let clients = ManagedCollection::new(seed::clients());

        assert!(clients.filter("inc ").is_empty());
        assert!(clients.filter("   ").is_empty());

        let hits = clients.filter("digital innovations");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].client_comp_id, 2);
    }

    #[test]
    fn insert_appends_with_fresh_key() {
        let mut clients = ManagedCollection::new(seed::clients());
        let created = clients.insert(client_draft("CL004", "Acme")).unwrap();
        assert_eq!(created.client_comp_id, 4);
        assert_eq!(clients.len(), 4);
        assert_eq!(clients.iter().last().unwrap().client_comp_code, "CL004");
    }

    #[test]
    fn keys_are_not_reused_after_delete() {
        let mut clients = ManagedCollection::new(seed::clients());
        assert!(clients.remove(&3).is_some());

        let created = clients.insert(client_draft("CL005", "Globex")).unwrap();
        assert_eq!(created.client_comp_id, 4);
        assert!(!clients.contains(&3));
    }

    #[test]
    fn empty_collection_starts_at_one() {
        let mut clients: ManagedCollection<Client> = ManagedCollection::default();
        assert!(clients.is_empty());
        let created = clients.insert(client_draft("CL001", "First")).unwrap();
        assert_eq!(created.client_comp_id, 1);
    }

    #[test]
    fn replace_and_remove_match_by_key() {
        let mut clients = ManagedCollection::new(seed::clients());
        let updated = clients.replace(&2, client_draft("CL002", "Digital Innovations SA")).unwrap();
        assert_eq!(updated.client_comp_id, 2);
        assert_eq!(updated.client_comp_name, "Digital Innovations SA");

        assert!(clients.replace(&42, client_draft("X", "Y")).is_none());
        assert!(clients.remove(&42).is_none());
        assert_eq!(clients.len(), 3);
    }

    #[test]
    fn subscription_keys_must_be_unique() {
        let mut plans = ManagedCollection::new(seed::subscriptions());
        let draft = SubscriptionDraft { subscription_id: " SUB001 ".into(), ..Default::default() };

        let err = plans.insert(draft).unwrap_err();
        assert!(matches!(err, AppError::DuplicateKey { entity: "Subscription", .. }));
        assert_eq!(plans.len(), 3);

        let draft = SubscriptionDraft { subscription_id: "SUB004".into(), ..Default::default() };
        let created: &Subscription = plans.insert(draft).unwrap();
        assert_eq!(created.subscription_id, "SUB004");
    }
}
