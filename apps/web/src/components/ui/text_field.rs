use leptos::prelude::*;

/// Labelled input bound to `value`.
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] inputmode: Option<&'static str>,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="mb-2 block text-sm font-medium text-slate-700" for=id>
                {label}
            </label>
            <input
                id=id
                type=input_type
                class="w-full rounded-lg border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200"
                autocomplete=autocomplete
                inputmode=inputmode
                required
                prop:value=move || value.get()
                on:input=move |event| value.set(event_target_value(&event))
            />
        </div>
    }
}
