use folio_core::{
    ContactForm, Field, Phase, Route, SubmitOutcome, reveal::RevealPolicy, submit_contact,
};
use folio_ui::Reveal;
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_meta::Title;

use crate::{
    cards::{STAGGER, social_links},
    relay::{FormCell, HttpRelay},
    use_notifier, use_site,
};

#[component]
pub fn Contact() -> impl IntoView {
    let site = use_site();
    let profile = site.content.profile().clone();
    let links = social_links(site.content.social());

    let mut methods = vec![("Email", profile.email.clone(), Some(profile.mailto()))];
    if let (Some(phone), Some(tel)) = (profile.phone.clone(), profile.tel()) {
        methods.push(("Phone", phone, Some(tel)));
    }
    if !profile.location.is_empty() {
        methods.push(("Location", profile.location.clone(), None));
    }

    view! {
      <Title text=Route::Contact.title() />
      <section class="folio-section folio-contact">
        <Reveal policy=RevealPolicy::hero()>
          <h1 class="folio-section-title">"Let's Create Something Amazing"</h1>
          <p class="folio-section-lead">
            "Have a project in mind or just want to say hi? My inbox is always open."
          </p>
        </Reveal>

        <div class="folio-contact-layout">
          <div class="folio-contact-methods">
            {methods
              .into_iter()
              .enumerate()
              .map(|(index, (label, value, href))| {
                view! {
                  <Reveal
                    policy=RevealPolicy::fade_up().staggered(index, STAGGER)
                    class="folio-card folio-contact-method"
                  >
                    <h3>{label}</h3>
                    {match href {
                      Some(href) => view! { <a href=href>{value}</a> }.into_any(),
                      None => view! { <p>{value}</p> }.into_any(),
                    }}
                  </Reveal>
                }
              })
              .collect_view()}
            {links}
          </div>

          <Reveal policy=RevealPolicy::slide_in(100) class="folio-contact-form">
            <ContactFormView />
          </Reveal>
        </div>
      </section>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let contact = use_site().config.contact.clone();
    let notifier = use_notifier();
    let form = RwSignal::new(ContactForm::new());
    let success_window = contact.success_window();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let relay = HttpRelay::new(contact.endpoint.clone());

        spawn_local(async move {
            let outcome = submit_contact(&FormCell(form), &notifier, &relay).await;
            if outcome != SubmitOutcome::Sent {
                return;
            }
            let Some(attempt) = form.try_with_untracked(ContactForm::attempt) else {
                return;
            };
            set_timeout(
                move || {
                    form.try_update(|f| f.end_success_window(attempt));
                },
                success_window,
            );
        });
    };

    let locked = move || form.with(ContactForm::is_locked);
    let succeeded = move || form.with(|f| f.phase() == Phase::Succeeded);

    view! {
      <form class="folio-form" novalidate=true on:submit=on_submit>
        <h2>"Send a Message"</h2>

        <Show when=succeeded>
          <p class="folio-form-success" role="status">
            "Thanks! Your message is on its way."
          </p>
        </Show>

        <FormField form=form field=Field::Name label="Your Name" placeholder="John Doe" />
        <FormField
          form=form
          field=Field::Email
          label="Email Address"
          placeholder="john@example.com"
          input_type="email"
        />
        <FormField form=form field=Field::Subject label="Subject" placeholder="Project Inquiry" />
        <FormField
          form=form
          field=Field::Message
          label="Message"
          placeholder="Tell me about your project..."
          multiline=true
        />

        <button type="submit" class="folio-button folio-submit" disabled=locked>
          {move || if locked() { "Sending your message..." } else { "Send Message" }}
        </button>
      </form>
    }
}

#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: Field,
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let id = format!("contact-{field}");
    let error_id = format!("{id}-error");
    let value = move || form.with(|f| f.draft().get(field).to_string());
    let error = move || form.with(|f| f.errors().get(field));
    let invalid = move || error().is_some().to_string();
    let locked = move || form.with(ContactForm::is_locked);
    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        form.update(|f| {
            f.update(field, value);
        });
    };

    let control = if multiline {
        view! {
          <textarea
            id=id.clone()
            name=field.key()
            rows="6"
            placeholder=placeholder
            prop:value=value
            disabled=locked
            aria-invalid=invalid
            aria-describedby=error_id.clone()
            on:input=on_input
          ></textarea>
        }
        .into_any()
    } else {
        view! {
          <input
            id=id.clone()
            name=field.key()
            type=input_type
            placeholder=placeholder
            prop:value=value
            disabled=locked
            aria-invalid=invalid
            aria-describedby=error_id.clone()
            on:input=on_input
          />
        }
        .into_any()
    };

    view! {
      <div class="folio-field" class:invalid=move || error().is_some()>
        <label for=id>{label}</label>
        {control}
        <p id=error_id class="folio-field-error" aria-live="polite">
          {error}
        </p>
      </div>
    }
}
