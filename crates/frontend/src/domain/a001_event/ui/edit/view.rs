use super::state::PhaseKind;
use super::view_model::EditEventViewModel;
use crate::routes::routes::HOME_PATH;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

#[component]
pub fn EditEventPage() -> impl IntoView {
    let vm = EditEventViewModel::new();
    let params = use_params_map();

    vm.load_categories();

    // Runs again whenever the route points at another event
    Effect::new(move |_| {
        let id = params.read().get("eventId").unwrap_or_default();
        vm.load_event(id);
    });

    let navigate = use_navigate();
    Effect::new(move |_| {
        if let Some(path) = vm.redirect.get() {
            navigate(&path, Default::default());
        }
    });

    // Keeps the form mounted while fields change
    let phase = Memo::new(move |_| vm.phase());

    view! {
        <div class="page page--detail event-edit" id="a001_event--edit">
            {move || match phase.get() {
                PhaseKind::Loading => view! {
                    <p class="page__status">"Evenement wordt geladen..."</p>
                }.into_any(),
                PhaseKind::LoadFailed => view! {
                    <div class="page__status page__status--error">
                        <p>"Het evenement kon niet worden geladen."</p>
                        <A href=HOME_PATH>"Terug naar het overzicht"</A>
                    </div>
                }.into_any(),
                PhaseKind::Editing => view! { <EditEventForm vm=vm /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn EditEventForm(vm: EditEventViewModel) -> impl IntoView {
    view! {
        <div class="details-form">
            <Input
                id="event-title"
                label="Titel"
                value=vm.field(|e| e.title.clone())
                on_input=Callback::new(move |v| vm.set_title(v))
            />
            <Input
                id="event-description"
                label="Beschrijving"
                value=vm.field(|e| e.description.clone())
                on_input=Callback::new(move |v| vm.set_description(v))
            />
            <Input
                id="event-start-time"
                label="Starttijd"
                input_type="datetime-local"
                value=vm.field(|e| e.start_time.clone())
                on_input=Callback::new(move |v| vm.set_start_time(v))
            />
            <Input
                id="event-end-time"
                label="Eindtijd"
                input_type="datetime-local"
                value=vm.field(|e| e.end_time.clone())
                on_input=Callback::new(move |v| vm.set_end_time(v))
            />
            <Select
                id="event-category"
                label="Categorie"
                placeholder="Selecteer een categorie"
                value=vm.selected_category()
                options=vm.category_options()
                on_change=Callback::new(move |v| vm.select_category(v))
            />
        </div>

        <div class="details-actions">
            <Button on_click=Callback::new(move |_| vm.save_command())>
                {icon("save")}
                "Opslaan"
            </Button>
            <Button variant="secondary" on_click=Callback::new(move |_| vm.cancel_command())>
                {icon("cancel")}
                "Annuleren"
            </Button>
            <Button variant="danger" on_click=Callback::new(move |_| vm.delete_command())>
                {icon("trash")}
                "Verwijderen"
            </Button>
        </div>

        <Show when=move || vm.is_confirming_delete()>
            <Modal title="Bevestig Verwijderen" on_close=Callback::new(move |_| vm.dismiss_delete())>
                <p>
                    "Weet u zeker dat u dit evenement wilt verwijderen? "
                    "Deze actie kan niet ongedaan gemaakt worden."
                </p>
                <div class="modal-footer">
                    <Button variant="danger" on_click=Callback::new(move |_| vm.confirm_delete_command())>
                        "Verwijderen"
                    </Button>
                    <Button variant="ghost" on_click=Callback::new(move |_| vm.dismiss_delete())>
                        "Annuleren"
                    </Button>
                </div>
            </Modal>
        </Show>
    }
}
