use super::{
    repository::{AdminVehiclesRepository, SaveOutcome, SaveRequest},
    utils::{AdminFilters, VehicleFormState},
};
use crate::{
    api::{ApiClient, ApiError, Vehicle, VehicleStatus},
    state::toast::{use_toast, ToastContext},
};
use leptos::*;
use std::rc::Rc;

pub const DELETE_CONFIRMATION: &str = "Tem certeza que deseja excluir este veículo?";

#[derive(Clone, Copy)]
pub struct AdminVehiclesViewModel {
    pub filters: RwSignal<AdminFilters>,
    pub reload: RwSignal<u32>,
    pub vehicles_resource: Resource<(Option<VehicleStatus>, u32), Result<Vec<Vehicle>, ApiError>>,
    pub filtered: Memo<Vec<Vehicle>>,
    pub dialog_open: RwSignal<bool>,
    pub editing_id: RwSignal<Option<String>>,
    pub form: RwSignal<VehicleFormState>,
    pub form_errors: RwSignal<Vec<&'static str>>,
    pub pending_delete: RwSignal<Option<String>>,
    pub save_action: Action<SaveRequest, Result<SaveOutcome, ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
    pub toast: ToastContext,
}

impl AdminVehiclesViewModel {
    pub fn open_new(&self) {
        self.editing_id.set(None);
        self.form.set(VehicleFormState::default());
        self.form_errors.set(Vec::new());
        self.dialog_open.set(true);
    }

    pub fn open_edit(&self, vehicle: &Vehicle) {
        self.editing_id.set(Some(vehicle.id.clone()));
        self.form.set(VehicleFormState::from_vehicle(vehicle));
        self.form_errors.set(Vec::new());
        self.dialog_open.set(true);
    }

    pub fn close_dialog(&self) {
        self.dialog_open.set(false);
        self.editing_id.set(None);
        self.form.update(|form| form.reset());
        self.form_errors.set(Vec::new());
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.with(Option::is_some)
    }

    /// The request for the current form, or `None` with the missing labels recorded.
    pub fn save_request(&self) -> Option<SaveRequest> {
        match self.form.with_untracked(VehicleFormState::validate_required) {
            Ok(payload) => {
                self.form_errors.set(Vec::new());
                Some(SaveRequest {
                    id: self.editing_id.get_untracked(),
                    payload,
                })
            }
            Err(missing) => {
                self.form_errors.set(missing);
                None
            }
        }
    }

    /// Dispatches a single insert or update; a blank required field sends nothing.
    pub fn submit(&self) -> bool {
        match self.save_request() {
            Some(request) => {
                self.save_action.dispatch(request);
                true
            }
            None => false,
        }
    }

    /// Success closes the dialog and refetches; failure leaves the dialog as it was.
    pub fn finish_save(&self, result: Result<SaveOutcome, ApiError>) {
        match result {
            Ok(outcome) => {
                self.toast.success(match outcome {
                    SaveOutcome::Updated(_) => "Veículo atualizado com sucesso!",
                    SaveOutcome::Created(_) => "Veículo adicionado com sucesso!",
                });
                self.close_dialog();
                self.refetch();
            }
            Err(err) => {
                log::error!("vehicle save failed: {}", err);
                self.toast.error("Erro ao salvar veículo");
            }
        }
    }

    pub fn finish_delete(&self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.toast.success("Veículo excluído com sucesso!");
                self.refetch();
            }
            Err(err) => {
                log::error!("vehicle delete failed: {}", err);
                self.toast.error("Erro ao excluir veículo");
            }
        }
    }

    pub fn request_delete(&self, id: String) {
        self.pending_delete.set(Some(id));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(id) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(id);
        }
    }

    fn refetch(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

pub fn use_admin_vehicles_view_model() -> AdminVehiclesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AdminVehiclesRepository::new_with_client(Rc::new(api));
    let toast = use_toast();

    let filters = create_rw_signal(AdminFilters::default());
    let reload = create_rw_signal(0u32);

    let repo_for_resource = repository.clone();
    let vehicles_resource = create_resource(
        move || (filters.with(AdminFilters::status_filter), reload.get()),
        move |(status, _reload)| {
            let repo = repo_for_resource.clone();
            async move { repo.fetch_vehicles(status).await }
        },
    );

    let filtered = create_memo(move |_| {
        let vehicles = vehicles_resource
            .get()
            .and_then(Result::ok)
            .unwrap_or_default();
        filters.with(|f| f.apply(&vehicles))
    });

    let repo_for_save = repository.clone();
    let save_action = create_action(move |request: &SaveRequest| {
        let repo = repo_for_save.clone();
        let request = request.clone();
        async move { repo.save(request).await }
    });

    let repo_for_delete = repository.clone();
    let delete_action = create_action(move |id: &String| {
        let repo = repo_for_delete.clone();
        let id = id.clone();
        async move { repo.delete(id).await }
    });

    let vm = AdminVehiclesViewModel {
        filters,
        reload,
        vehicles_resource,
        filtered,
        dialog_open: create_rw_signal(false),
        editing_id: create_rw_signal(None),
        form: create_rw_signal(VehicleFormState::default()),
        form_errors: create_rw_signal(Vec::new()),
        pending_delete: create_rw_signal(None),
        save_action,
        delete_action,
        toast,
    };

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            vm.finish_save(result);
        }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            vm.finish_delete(result);
        }
    });

    create_effect(move |_| {
        if let Some(Err(err)) = vehicles_resource.get() {
            log::error!("failed to load vehicles: {}", err);
            toast.error("Erro ao carregar veículos");
        }
    });

    vm
}
