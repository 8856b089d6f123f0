// src/services/entity_manager.rs

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    common::error::AppError,
    db::ManagedCollection,
    models::{
        entity::{Entity, FormInput},
        notice::{DeletePrompt, Notice},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Dialog {
    Closed,
    Create,
    Edit,
    Delete,
}

/// Resultado de uma alteração confirmada.
#[derive(Debug, Clone, Serialize)]
pub struct Mutation<E: Entity> {
    pub record: E,
    pub notice: Notice,
}

/// Foto do estado da página: o que a tabela e os diálogos mostram.
#[derive(Debug, Clone, Serialize)]
pub struct ManagerView<E: Entity> {
    pub entity: &'static str,
    pub search: String,
    pub total: usize,
    pub items: Vec<E>,
    pub dialog: Dialog,
    pub selected: Option<E::Key>,
    pub form: E::Draft,
    pub form_fields: &'static [&'static str],
    pub prompt: Option<DeletePrompt>,
}

// =============================================================================
//  GERENCIADOR GENÉRICO DE CRUD
// =============================================================================

/// Uma página de CRUD: coleção, busca ativa, diálogos e buffer do formulário.
#[derive(Debug, Clone)]
pub struct EntityManager<E: Entity> {
    collection: ManagedCollection<E>,
    search: String,
    dialog: Dialog,
    selected: Option<E::Key>,
    form: E::Draft,
}

impl<E: Entity> EntityManager<E> {
    pub fn new(collection: ManagedCollection<E>) -> Self {
        Self {
            collection,
            search: String::new(),
            dialog: Dialog::Closed,
            selected: None,
            form: E::Draft::default(),
        }
    }

    pub fn seeded(records: Vec<E>) -> Self {
        Self::new(ManagedCollection::new(records))
    }

    pub fn collection(&self) -> &ManagedCollection<E> {
        &self.collection
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn dialog(&self) -> Dialog {
        self.dialog
    }

    pub fn selected(&self) -> Option<&E::Key> {
        self.selected.as_ref()
    }

    pub fn form(&self) -> &E::Draft {
        &self.form
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn visible(&self) -> Vec<&E> {
        self.collection.filter(&self.search)
    }

    // --- Formulário ---

    pub fn set_form(&mut self, draft: E::Draft) {
        self.form = draft;
    }

    pub fn set_field(&mut self, field: &str, raw: &str) -> Result<(), AppError> {
        self.form.set_field(field, raw)
    }

    /// Aplica vários campos de uma vez: um campo inválido descarta todos.
    pub fn set_fields<'a, I>(&mut self, fields: I) -> Result<(), AppError>
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        let mut form = self.form.clone();
        for (field, raw) in fields {
            form.set_field(field, &raw)?;
        }
        self.form = form;
        Ok(())
    }

    fn close(&mut self) {
        self.dialog = Dialog::Closed;
        self.selected = None;
        self.form = E::Draft::default();
    }

    pub fn cancel(&mut self) {
        if self.dialog != Dialog::Closed {
            tracing::debug!("{} dialog cancelled", E::LABEL);
        }
        self.close();
    }

    // --- Criação ---

    pub fn open_create(&mut self) {
        self.close();
        self.dialog = Dialog::Create;
    }

    /// Em caso de erro o diálogo continua aberto com o que foi digitado.
    pub fn submit_create(&mut self) -> Result<Mutation<E>, AppError> {
        let record = self.collection.insert(self.form.clone())?.clone();
        self.close();

        tracing::info!("{} {} created", E::LABEL, record.key());
        Ok(Mutation { record, notice: Notice::created(E::LABEL) })
    }

    // --- Edição ---

    pub fn begin_edit(&mut self, key: &E::Key) -> Result<(), AppError> {
        let draft = self.find(key)?.to_draft();
        self.dialog = Dialog::Edit;
        self.selected = Some(key.clone());
        self.form = draft;
        Ok(())
    }

    /// Sem registro selecionado (ou se ele sumiu) nada acontece.
    pub fn commit_update(&mut self) -> Option<Mutation<E>> {
        if self.dialog != Dialog::Edit {
            tracing::debug!("{} update ignored: no record selected", E::LABEL);
            return None;
        }
        let key = self.selected.take()?;
        let draft = std::mem::take(&mut self.form);
        let updated = self.collection.replace(&key, draft).cloned();
        self.close();

        match updated {
            Some(record) => {
                tracing::info!("{} {} updated", E::LABEL, key);
                Some(Mutation { record, notice: Notice::updated(E::LABEL) })
            }
            None => {
                tracing::debug!("{} {} vanished before update", E::LABEL, key);
                None
            }
        }
    }

    // --- Exclusão (duas etapas) ---

    pub fn request_delete(&mut self, key: &E::Key) -> Result<DeletePrompt, AppError> {
        let prompt = Self::prompt_for(self.find(key)?);
        self.dialog = Dialog::Delete;
        self.selected = Some(key.clone());
        self.form = E::Draft::default();
        Ok(prompt)
    }

    pub fn confirm_delete(&mut self) -> Option<Mutation<E>> {
        if self.dialog != Dialog::Delete {
            tracing::debug!("{} delete ignored: no record selected", E::LABEL);
            return None;
        }
        let key = self.selected.take()?;
        let removed = self.collection.remove(&key);
        self.close();

        removed.map(|record| {
            tracing::info!("{} {} deleted", E::LABEL, key);
            Mutation { record, notice: Notice::deleted(E::LABEL) }
        })
    }

    /// Confirma o diálogo que estiver aberto.
    pub fn submit(&mut self) -> Result<Option<Mutation<E>>, AppError> {
        match self.dialog {
            Dialog::Create => self.submit_create().map(Some),
            Dialog::Edit => Ok(self.commit_update()),
            Dialog::Delete => Ok(self.confirm_delete()),
            Dialog::Closed => Ok(None),
        }
    }

    pub fn view(&self) -> ManagerView<E> {
        let prompt = match (self.dialog, &self.selected) {
            (Dialog::Delete, Some(key)) => self.collection.get(key).map(Self::prompt_for),
            _ => None,
        };

        ManagerView {
            entity: E::LABEL,
            search: self.search.clone(),
            total: self.collection.len(),
            items: self.visible().into_iter().cloned().collect(),
            dialog: self.dialog,
            selected: self.selected.clone(),
            form: self.form.clone(),
            form_fields: <E::Draft as FormInput>::FIELDS,
            prompt,
        }
    }

    fn find(&self, key: &E::Key) -> Result<&E, AppError> {
        self.collection.get(key).ok_or_else(|| AppError::NotFound {
            entity: E::LABEL,
            key: key.to_string(),
        })
    }

    fn prompt_for(record: &E) -> DeletePrompt {
        DeletePrompt::new(
            E::LABEL,
            record.key().to_string(),
            record.display_name(),
            E::DELETE_WORDING,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::seed,
        models::{
            client::{Client, ClientDraft},
            license::License,
            notice::NoticeVariant,
            product::Product,
            subscription::{Subscription, SubscriptionDraft},
        },
    };

    fn clients() -> EntityManager<Client> {
        EntityManager::seeded(seed::clients())
    }

    #[test]
    fn create_appends_one_record_with_unique_key() {
        let mut manager = clients();
        manager.open_create();
        assert_eq!(manager.dialog(), Dialog::Create);

        manager.set_field("client_comp_code", "CL004").unwrap();
        manager.set_field("client_comp_name", "Acme Corp").unwrap();
        manager.set_field("client_comp_short_name", "Acme").unwrap();

        let created = manager.submit().unwrap().unwrap();
        assert_eq!(created.record.client_comp_id, 4);
        assert_eq!(created.notice.title, "Client Created");
        assert_eq!(manager.collection().len(), 4);

        let keys: Vec<_> = manager.collection().iter().map(|c| c.client_comp_id).collect();
        assert_eq!(keys, vec![1, 2, 3, 4]);

        // Diálogo fechado e formulário limpo
        assert_eq!(manager.dialog(), Dialog::Closed);
        assert_eq!(manager.form(), &ClientDraft::default());
    }

    #[test]
    fn edit_copies_record_into_the_form() {
        let mut manager = clients();
        manager.begin_edit(&2).unwrap();

        assert_eq!(manager.dialog(), Dialog::Edit);
        assert_eq!(manager.selected(), Some(&2));
        assert_eq!(manager.form().client_comp_name, "Digital Innovations Ltd");
        assert_eq!(manager.form().client_comp_short_name, "DigInno");
    }

    #[test]
    fn update_replaces_non_key_fields() {
        let mut manager = clients();
        manager.begin_edit(&3).unwrap();
        manager.set_field("client_comp_name", "Future Systems Group").unwrap();
        manager.set_field("is_active", "true").unwrap();

        let updated = manager.commit_update().unwrap();
        assert_eq!(updated.record.client_comp_id, 3);
        assert_eq!(updated.notice.title, "Client Updated");
        assert_eq!(manager.collection().len(), 3);

        let stored = manager.collection().get(&3).unwrap();
        assert_eq!(stored.client_comp_name, "Future Systems Group");
        assert_eq!(stored.client_comp_code, "CL003");
        assert!(stored.is_active);
        assert_eq!(manager.selected(), None);
    }

    #[test]
    fn update_without_selection_is_a_no_op() {
        let mut manager = clients();
        assert!(manager.commit_update().is_none());
        assert!(manager.confirm_delete().is_none());
        assert!(manager.submit().unwrap().is_none());
        assert_eq!(manager.collection().len(), 3);
    }

    #[test]
    fn delete_is_two_step() {
        let mut manager = clients();
        let prompt = manager.request_delete(&1).unwrap();
        assert!(prompt.description.contains("\"Tech Solutions Inc\""));
        assert_eq!(manager.dialog(), Dialog::Delete);
        assert_eq!(manager.collection().len(), 3);

        let view = manager.view();
        assert_eq!(view.prompt.as_ref(), Some(&prompt));

        let deleted = manager.confirm_delete().unwrap();
        assert_eq!(deleted.record.client_comp_id, 1);
        assert_eq!(deleted.notice.variant, NoticeVariant::Destructive);
        assert_eq!(manager.collection().len(), 2);
        assert!(!manager.collection().contains(&1));
    }

    #[test]
    fn cancelling_delete_keeps_the_record() {
        let mut manager = clients();
        manager.request_delete(&2).unwrap();
        manager.cancel();

        assert_eq!(manager.dialog(), Dialog::Closed);
        assert_eq!(manager.selected(), None);
        assert!(manager.confirm_delete().is_none());
        assert_eq!(manager.collection().len(), 3);
    }

    #[test]
    fn unknown_keys_are_not_found() {
        let mut manager = clients();
        assert!(matches!(manager.begin_edit(&99), Err(AppError::NotFound { .. })));
        assert!(matches!(manager.request_delete(&99), Err(AppError::NotFound { .. })));
        assert_eq!(manager.dialog(), Dialog::Closed);
    }

    #[test]
    fn update_after_record_vanished_is_a_no_op() {
        let mut manager = clients();
        manager.begin_edit(&1).unwrap();

        // Outra chamada removeu o registro enquanto o diálogo estava aberto
        let mut other = manager.clone();
        other.request_delete(&1).unwrap();
        other.confirm_delete().unwrap();
        manager.collection = other.collection.clone();

        assert!(manager.commit_update().is_none());
        assert_eq!(manager.collection().len(), 2);
        assert_eq!(manager.dialog(), Dialog::Closed);
    }

    #[test]
    fn rejected_field_leaves_the_form_untouched() {
        let mut manager = clients();
        manager.begin_edit(&2).unwrap();

        let err = manager
            .set_fields([
                ("client_comp_name", "Renamed".to_string()),
                ("nickname", "x".to_string()),
            ])
            .unwrap_err();
        assert!(matches!(err, AppError::UnknownField { .. }));
        assert_eq!(manager.form().client_comp_name, "Digital Innovations Ltd");

        manager
            .set_fields([("client_comp_short_name", "DI".to_string())])
            .unwrap();
        assert_eq!(manager.form().client_comp_short_name, "DI");
    }

    #[test]
    fn search_filters_the_visible_rows() {
        let mut manager = clients();
        manager.set_search("techsol");
        let visible = manager.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].client_comp_short_name, "TechSol");

        let view = manager.view();
        assert_eq!(view.total, 3);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.search, "techsol");
    }

    #[test]
    fn product_search_covers_model_number() {
        let mut manager = EntityManager::<Product>::seeded(seed::products());
        manager.set_search("hrms-004");
        let names: Vec<_> = manager.visible().iter().map(|p| p.main_app_name.clone()).collect();
        assert_eq!(names, vec!["HRMS"]);
    }

    #[test]
    fn license_search_covers_app_id() {
        let mut manager = EntityManager::<License>::seeded(seed::licenses());
        manager.set_search("app002");
        let ids: Vec<_> = manager.visible().iter().map(|l| l.client_subscription_id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn subscription_key_survives_edit() {
        let mut manager = EntityManager::<Subscription>::seeded(seed::subscriptions());
        manager.begin_edit(&"SUB002".to_string()).unwrap();
        manager.set_field("subscription_id", "SUB777").unwrap();
        manager.set_field("subscription_price", "249.99").unwrap();

        let updated = manager.commit_update().unwrap();
        assert_eq!(updated.record.subscription_id, "SUB002");
        assert_eq!(updated.record.subscription_price.to_string(), "249.99");
        assert!(manager.collection().get(&"SUB777".to_string()).is_none());
    }

    #[test]
    fn duplicate_subscription_keeps_dialog_open() {
        let mut manager = EntityManager::<Subscription>::seeded(seed::subscriptions());
        manager.open_create();
        manager.set_form(SubscriptionDraft {
            subscription_id: "SUB001".into(),
            subscription_name: "Copy".into(),
            ..Default::default()
        });

        assert!(matches!(manager.submit(), Err(AppError::DuplicateKey { .. })));
        assert_eq!(manager.dialog(), Dialog::Create);
        assert_eq!(manager.form().subscription_name, "Copy");
        assert_eq!(manager.collection().len(), 3);
    }

    #[test]
    fn every_entity_reports_notices() {
        let mut manager = EntityManager::<License>::seeded(seed::licenses());
        manager.open_create();
        manager.set_field("client_comp_code", "CLI003").unwrap();
        manager.set_field("max_allowed_users", "abc").unwrap();

        let created = manager.submit_create().unwrap();
        assert_eq!(created.record.client_subscription_id, 3);
        assert_eq!(created.record.max_allowed_users, 0);
        assert_eq!(created.notice.title, "License Created");
    }
}
