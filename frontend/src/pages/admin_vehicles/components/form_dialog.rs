use crate::{
    api::{VehicleCategory, VehicleStatus},
    components::layout::ErrorMessage,
    pages::admin_vehicles::{utils::VehicleFormState, view_model::AdminVehiclesViewModel},
};
use leptos::ev::{KeyboardEvent, SubmitEvent};
use leptos::*;

type Getter = fn(&VehicleFormState) -> String;
type Setter = fn(&mut VehicleFormState, String);

const INPUT_CLASS: &str =
    "w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg";
const LABEL_CLASS: &str = "block text-sm font-medium text-fg mb-1";

fn text_field(
    form: RwSignal<VehicleFormState>,
    label: &'static str,
    input_type: &'static str,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class=LABEL_CLASS>{label}</span>
            <input
                type=input_type
                class=INPUT_CLASS
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|state| set(state, event_target_value(&ev)))
            />
        </label>
    }
}

pub fn dialog_title(editing: bool) -> &'static str {
    if editing {
        "Editar Veículo"
    } else {
        "Novo Veículo"
    }
}

pub fn submit_label(editing: bool) -> &'static str {
    if editing {
        "Atualizar"
    } else {
        "Adicionar"
    }
}

#[component]
pub fn VehicleFormDialog(vm: AdminVehiclesViewModel) -> impl IntoView {
    let form = vm.form;
    let pending = vm.save_action.pending();
    let editing = Signal::derive(move || vm.is_editing());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        vm.submit();
    };

    view! {
        <Show when=move || vm.dialog_open.get()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Fechar"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| vm.close_dialog()
                ></button>
                <div
                    class="relative z-[61] w-full max-w-3xl max-h-[90vh] overflow-y-auto rounded-lg bg-surface-elevated shadow-xl border border-border p-6"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            vm.close_dialog();
                        }
                    }
                >
                    <h2 class="text-xl font-semibold text-fg mb-4">{move || dialog_title(editing.get())}</h2>
                    {move || {
                        let missing = vm.form_errors.get();
                        (!missing.is_empty()).then(|| view! {
                            <ErrorMessage message=format!("Preencha os campos obrigatórios: {}", missing.join(", ")) />
                        })
                    }}
                    <form class="space-y-4" on:submit=on_submit>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            {text_field(form, "Título *", "text", |f| f.title.clone(), |f, v| f.title = v)}
                            <label class="block">
                                <span class=LABEL_CLASS>"Tipo *"</span>
                                <select
                                    class=INPUT_CLASS
                                    prop:value=move || form.with(|f| f.vehicle_type.as_str())
                                    on:change=move |ev| form.update(|f| {
                                        f.vehicle_type = VehicleCategory::from_raw(&event_target_value(&ev))
                                    })
                                >
                                    {VehicleCategory::ALL
                                        .iter()
                                        .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                                        .collect_view()}
                                </select>
                            </label>
                        </div>
                        <label class="block">
                            <span class=LABEL_CLASS>"Descrição *"</span>
                            <textarea
                                rows="3"
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| f.description.clone())
                                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                            ></textarea>
                        </label>
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            {text_field(form, "Fabricante *", "text", |f| f.manufacturer.clone(), |f, v| f.manufacturer = v)}
                            {text_field(form, "Modelo *", "text", |f| f.model.clone(), |f, v| f.model = v)}
                            {text_field(form, "Ano *", "number", |f| f.year.clone(), |f, v| f.year = v)}
                            {text_field(form, "Km *", "number", |f| f.mileage.clone(), |f, v| f.mileage = v)}
                            {text_field(form, "Preço (R$)", "number", |f| f.price.clone(), |f, v| f.price = v)}
                            {text_field(form, "Localização *", "text", |f| f.location.clone(), |f, v| f.location = v)}
                            {text_field(form, "Cor", "text", |f| f.color.clone(), |f, v| f.color = v)}
                            {text_field(form, "Lugares", "number", |f| f.seats.clone(), |f, v| f.seats = v)}
                            {text_field(form, "Combustível", "text", |f| f.fuel_type.clone(), |f, v| f.fuel_type = v)}
                            {text_field(form, "Transmissão", "text", |f| f.transmission.clone(), |f, v| f.transmission = v)}
                            <label class="block">
                                <span class=LABEL_CLASS>"Status"</span>
                                <select
                                    class=INPUT_CLASS
                                    prop:value=move || form.with(|f| f.status.as_str())
                                    on:change=move |ev| form.update(|f| {
                                        f.status = VehicleStatus::from_raw(&event_target_value(&ev))
                                    })
                                >
                                    {VehicleStatus::ALL
                                        .iter()
                                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                        .collect_view()}
                                </select>
                            </label>
                            <label class="flex items-center gap-2 mt-6">
                                <input
                                    type="checkbox"
                                    prop:checked=move || form.with(|f| f.featured)
                                    on:change=move |ev| form.update(|f| f.featured = event_target_checked(&ev))
                                />
                                <span class="text-sm text-fg">"Destaque"</span>
                            </label>
                        </div>
                        <div class="flex justify-end gap-2 pt-2">
                            <button
                                type="button"
                                class="px-4 py-2 rounded-md text-sm font-semibold bg-surface-muted text-fg"
                                on:click=move |_| vm.close_dialog()
                            >
                                "Cancelar"
                            </button>
                            <button
                                type="submit"
                                class="px-4 py-2 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                                disabled=move || pending.get()
                            >
                                {move || submit_label(editing.get())}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
