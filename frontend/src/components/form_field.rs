use shared::{input_type_for, FieldId};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::FormControl;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub control: FormControl,
    pub field: FieldId,
    pub label: AttrValue,
    pub placeholder: AttrValue,
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let name = props.field.name();

    let oninput = {
        let control = props.control.clone();
        let field = props.field;
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            control.set_value(field, input.value());
        })
    };

    html! {
        <div class="form-item">
            <label class="form-label" for={name}>{props.label.clone()}</label>
            <div class="form-control">
                <input
                    id={name}
                    name={name}
                    class="input-class"
                    type={input_type_for(name)}
                    placeholder={props.placeholder.clone()}
                    value={props.control.value(props.field)}
                    oninput={oninput}
                    disabled={props.control.is_disabled()}
                />
            </div>
            {if let Some(error) = props.control.first_error(props.field) {
                html! {
                    <p class="form-message">{error}</p>
                }
            } else { html! {} }}
        </div>
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use crate::hooks::use_form_control;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[function_component(CredentialFields)]
    fn credential_fields() -> Html {
        let control = use_form_control();
        html! {
            <>
                {for [FieldId::Email, FieldId::Password, FieldId::Ssn].into_iter().map(|field| html! {
                    <FormField
                        control={control.clone()}
                        field={field}
                        label={field.label()}
                        placeholder={field.placeholder()}
                    />
                })}
            </>
        }
    }

    #[wasm_bindgen_test]
    async fn test_only_password_input_is_masked() {
        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        yew::Renderer::<CredentialFields>::with_root(root.clone()).render();
        TimeoutFuture::new(10).await;

        let input_type = |id: &str| {
            root.query_selector(&format!("input#{}", id))
                .unwrap()
                .and_then(|input| input.get_attribute("type"))
        };
        assert_eq!(input_type("password").as_deref(), Some("password"));
        assert_eq!(input_type("email").as_deref(), Some("text"));
        assert_eq!(input_type("ssn").as_deref(), Some("text"));
    }
}
