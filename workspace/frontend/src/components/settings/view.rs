use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::common::toast::ToastContext;
use crate::settings;

#[function_component(Settings)]
pub fn settings_view() -> Html {
    let current = settings::get_settings();
    let api_host = use_state(|| current.api_host.clone());
    let api_port = use_state(|| current.api_port.to_string());
    let api_use_https = use_state(|| current.api_use_https);
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let on_host_input = {
        let api_host = api_host.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            api_host.set(input.value());
        })
    };

    let on_port_input = {
        let api_port = api_port.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            api_port.set(input.value());
        })
    };

    let on_https_toggle = {
        let api_use_https = api_use_https.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            api_use_https.set(input.checked());
        })
    };

    let on_save = {
        let api_host = api_host.clone();
        let api_port = api_port.clone();
        let api_use_https = api_use_https.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |_: MouseEvent| {
            let port = api_port
                .parse::<u16>()
                .unwrap_or_else(|_| settings::get_settings().api_port);

            settings::update_settings(|s| {
                s.api_host = (*api_host).clone();
                s.api_port = port;
                s.api_use_https = *api_use_https;
            });

            match settings::get_settings().save_to_storage() {
                Ok(()) => {
                    log::info!("Settings saved: {}", settings::get_settings().api_base_url());
                    toast_ctx.show_success("Settings saved.".to_string());
                }
                Err(e) => {
                    log::error!("Failed to persist settings: {:?}", e);
                    toast_ctx.show_error("Failed to persist settings.".to_string());
                }
            }
        })
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Connection Settings"}</h2>
                    <p class="text-sm text-gray-500">
                        {format!("Current API base URL: {}", settings::get_settings().api_base_url())}
                    </p>
                    <div class="form-control w-full mt-4">
                        <label class="label"><span class="label-text">{"API Host"}</span></label>
                        <input
                            type="text"
                            class="input input-bordered w-full"
                            placeholder="localhost"
                            value={(*api_host).clone()}
                            oninput={on_host_input}
                        />
                    </div>
                    <div class="form-control w-full">
                        <label class="label"><span class="label-text">{"API Port"}</span></label>
                        <input
                            type="number"
                            class="input input-bordered w-full"
                            placeholder="8000"
                            value={(*api_port).clone()}
                            oninput={on_port_input}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label cursor-pointer justify-start gap-2">
                            <input
                                type="checkbox"
                                class="checkbox checkbox-primary"
                                checked={*api_use_https}
                                onchange={on_https_toggle}
                            />
                            <span class="label-text">{"Use HTTPS"}</span>
                        </label>
                    </div>
                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-primary" onclick={on_save}>{"Save"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
