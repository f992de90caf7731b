//! Workflow page renderer
//!
//! Pure function of (content bundle, workflow snapshot); handlers only fetch
//! the inputs. Interactive elements carry `data-post` / `data-upload`
//! attributes that `diagnose.js` turns into JSON API calls.

use uuid::Uuid;

use crate::content::{localized_diagnosis, ContentBundle};
use crate::intake::Accept;
use crate::models::{DiagnosisPayload, SoilParameter, SoilParameterSet, UploadedImage};
use crate::workflow::{SelectOption, SoilView, WorkflowSnapshot, WorkflowView};
use krishi_common::Language;

/// Escape text for HTML element content and quoted attributes
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the full page for one workflow
pub fn render_page(
    content: &ContentBundle,
    snapshot: &WorkflowSnapshot,
    greeting: Option<&str>,
) -> String {
    let id = snapshot.workflow_id;
    let body = match &snapshot.view {
        WorkflowView::Upload { notice, soil } => {
            format!(
                "{}{}{}",
                render_notice(notice.as_deref()),
                render_upload(content, id),
                render_soil(content, id, soil)
            )
        }
        WorkflowView::Analyzing { image, progress } => render_analyzing(content, image, *progress),
        WorkflowView::Results { image, diagnosis } => {
            render_results(content, id, image, &localized_diagnosis(content, diagnosis))
        }
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/krishi-ui.css">
</head>
<body data-workflow="{id}" data-stage="{stage}" data-lang="{lang}">
{header}
    <main class="content">
        <nav class="tabs"><span class="tab active">{diagnose_tab}</span></nav>
{body}
    </main>
    <footer>krishi-diagnose v{version} ({git_hash})</footer>
    <script src="/static/diagnose.js"></script>
</body>
</html>
"#,
        lang = content.language.key(),
        title = escape_html(content.title),
        id = id,
        stage = snapshot.stage,
        header = render_header(content, greeting),
        diagnose_tab = escape_html(content.page.diagnose_tab),
        body = body,
        version = env!("CARGO_PKG_VERSION"),
        git_hash = env!("KRISHI_GIT_HASH"),
    )
}

fn render_header(content: &ContentBundle, greeting: Option<&str>) -> String {
    let options: String = Language::ALL
        .iter()
        .map(|lang| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                lang.key(),
                selected(*lang == content.language),
                lang.native_label()
            )
        })
        .collect();
    let greeting = greeting
        .map(|name| format!(r#"<span class="greeting">{}</span>"#, escape_html(name)))
        .unwrap_or_default();

    format!(
        r#"    <header>
        <div class="header-content">
            <div class="header-left">
                <h1>{}</h1>
                <p class="subtitle">{}</p>
            </div>
            <div class="header-right">
                {}
                <select id="language-select">{}</select>
            </div>
        </div>
    </header>"#,
        escape_html(content.title),
        escape_html(content.subtitle),
        greeting,
        options
    )
}

fn render_notice(notice: Option<&str>) -> String {
    match notice {
        Some(text) => format!(
            r#"        <div class="notice" role="alert">{}</div>
"#,
            escape_html(text)
        ),
        None => String::new(),
    }
}

fn render_upload(content: &ContentBundle, id: Uuid) -> String {
    let tips: String = content
        .tips
        .tips()
        .iter()
        .map(|tip| format!("<li>{}</li>", escape_html(tip)))
        .collect();

    format!(
        r#"        <section class="card">
            <h2>{prompt}</h2>
            <div class="button-row">
                <label class="button">{take_photo}
                    <input type="file" accept="{photo_accept}" capture="environment" data-upload="/workflows/{id}/image" hidden>
                </label>
                <label class="button button-outline">{upload_image}
                    <input type="file" accept="{photo_accept}" data-upload="/workflows/{id}/image" hidden>
                </label>
            </div>
            <h3>{photo_tips}</h3>
            <ul class="tips">{tips}</ul>
        </section>
"#,
        prompt = escape_html(content.upload_prompt),
        take_photo = escape_html(content.take_photo),
        upload_image = escape_html(content.upload_image),
        photo_accept = Accept::CropPhoto.html_accept(),
        id = id,
        photo_tips = escape_html(content.tips.photo_tips),
        tips = tips,
    )
}

fn render_soil(content: &ContentBundle, id: Uuid, soil: &SoilView) -> String {
    let inner = match soil {
        SoilView::PathChoice => format!(
            r#"<p>{prompt}</p>
            <div class="button-row">
                <button class="button" data-post="/workflows/{id}/soil/path" data-body="{card_body}">{has_card}</button>
                <button class="button button-outline" data-post="/workflows/{id}/soil/path" data-body="{lookup_body}">{no_card}</button>
            </div>"#,
            prompt = escape_html(content.page.soil_prompt),
            id = id,
            card_body = escape_html(r#"{"has_card":true}"#),
            lookup_body = escape_html(r#"{"has_card":false}"#),
            has_card = escape_html(content.has_card),
            no_card = escape_html(content.no_card),
        ),
        SoilView::CardUpload => format!(
            r#"<p>{prompt}</p>
            <label class="button">{upload_card}
                <input type="file" accept="{card_accept}" data-upload="/workflows/{id}/soil/card" hidden>
            </label>
            <div class="button-row">
                <button class="button button-ghost" data-post="/workflows/{id}/soil/path" data-body="{lookup_body}">{no_card}</button>
            </div>"#,
            prompt = escape_html(content.page.card_prompt),
            upload_card = escape_html(content.upload_card),
            card_accept = Accept::SoilCard.html_accept(),
            id = id,
            lookup_body = escape_html(r#"{"has_card":false}"#),
            no_card = escape_html(content.no_card),
        ),
        SoilView::LocationLookup {
            states,
            districts,
            cities,
            state,
            district,
            city,
            district_enabled,
            city_enabled,
            can_continue,
            manual,
        } => render_location_lookup(
            content,
            id,
            LookupFields {
                states,
                districts,
                cities,
                state: state.as_deref(),
                district: district.as_deref(),
                city: city.as_deref(),
                district_enabled: *district_enabled,
                city_enabled: *city_enabled,
                can_continue: *can_continue,
                manual: manual.as_ref(),
            },
        ),
        SoilView::Summary {
            source: _,
            location_label,
            card,
            readings,
        } => {
            let location = location_label
                .as_deref()
                .map(|label| format!(r#"<p class="location">{}</p>"#, escape_html(label)))
                .unwrap_or_default();
            let card = card.as_ref().map(render_card).unwrap_or_default();
            let rows: String = readings
                .iter()
                .map(|reading| {
                    let badge = reading
                        .status
                        .map(|status| {
                            format!(
                                r#"<span class="badge {}">{}</span>"#,
                                status.badge_class(),
                                status.as_str()
                            )
                        })
                        .unwrap_or_default();
                    format!(
                        r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
                        escape_html(content.soil_data.label(reading.parameter)),
                        escape_html(reading.value.as_deref().unwrap_or("-")),
                        escape_html(reading.range),
                        badge
                    )
                })
                .collect();
            format!(
                r#"{location}{card}
            <h3>{parameters}</h3>
            <table class="readings"><tbody>{rows}</tbody></table>
            <button class="button button-ghost" data-post="/workflows/{id}/soil/reset">{back}</button>"#,
                location = location,
                card = card,
                parameters = escape_html(content.soil_parameters),
                rows = rows,
                id = id,
                back = escape_html(content.actions.back),
            )
        }
    };

    format!(
        r#"        <section class="card soil">
            <h2>{}</h2>
            {}
        </section>
"#,
        escape_html(content.soil_health),
        inner
    )
}

fn render_card(card: &UploadedImage) -> String {
    if card.is_pdf() {
        r#"<p class="card-note">PDF</p>"#.to_string()
    } else {
        format!(
            r#"<img class="soil-card" src="{}" alt="">"#,
            escape_html(card.as_str())
        )
    }
}

struct LookupFields<'a> {
    states: &'a [SelectOption],
    districts: &'a [String],
    cities: &'a [String],
    state: Option<&'a str>,
    district: Option<&'a str>,
    city: Option<&'a str>,
    district_enabled: bool,
    city_enabled: bool,
    can_continue: bool,
    manual: Option<&'a SoilParameterSet>,
}

fn render_location_lookup(content: &ContentBundle, id: Uuid, fields: LookupFields<'_>) -> String {
    let state_options: String = fields
        .states
        .iter()
        .map(|o| option(&o.value, &o.label, fields.state == Some(o.value.as_str())))
        .collect();
    let district_options: String = fields
        .districts
        .iter()
        .map(|d| option(d, d, fields.district == Some(d.as_str())))
        .collect();
    let city_options: String = fields
        .cities
        .iter()
        .map(|c| option(c, c, fields.city == Some(c.as_str())))
        .collect();

    let actions = match fields.manual {
        Some(values) => render_manual_form(content, id, values),
        None => format!(
            r#"<div class="button-row">
                <button class="button" data-post="/workflows/{id}/soil/reference"{disabled}>{view_reference}</button>
                <button class="button button-outline" data-post="/workflows/{id}/soil/manual/open"{disabled}>{manual_entry}</button>
            </div>"#,
            id = id,
            disabled = disabled(!fields.can_continue),
            view_reference = escape_html(content.page.view_reference),
            manual_entry = escape_html(content.manual_entry),
        ),
    };

    format!(
        r#"<h3>{details}</h3>
            <div class="location-grid">
                <select data-level="state" data-post="/workflows/{id}/soil/location"><option value="">{select_state}</option>{state_options}</select>
                <select data-level="district" data-post="/workflows/{id}/soil/location"{district_disabled}><option value="">{select_district}</option>{district_options}</select>
                <select data-level="city" data-post="/workflows/{id}/soil/location"{city_disabled}><option value="">{select_city}</option>{city_options}</select>
            </div>
            {actions}"#,
        details = escape_html(content.location_details),
        id = id,
        select_state = escape_html(content.select_state),
        state_options = state_options,
        district_disabled = disabled(!fields.district_enabled),
        select_district = escape_html(content.select_district),
        district_options = district_options,
        city_disabled = disabled(!fields.city_enabled),
        select_city = escape_html(content.select_city),
        city_options = city_options,
        actions = actions,
    )
}

fn render_manual_form(content: &ContentBundle, id: Uuid, values: &SoilParameterSet) -> String {
    let inputs: String = SoilParameter::ALL
        .iter()
        .map(|parameter| {
            format!(
                r#"<label>{label}
                    <input type="number" step="any" inputmode="decimal" placeholder="{placeholder}" value="{value}" data-parameter="{key}" data-post="/workflows/{id}/soil/manual/field">
                </label>"#,
                label = escape_html(content.soil_data.label(*parameter)),
                placeholder = escape_html(content.page.enter_value),
                value = escape_html(values.raw(*parameter).unwrap_or("")),
                key = parameter.key(),
                id = id,
            )
        })
        .collect();

    format!(
        r#"<h3>{manual_entry}</h3>
            <div class="manual-grid">{inputs}</div>
            <div class="button-row">
                <button class="button" data-post="/workflows/{id}/soil/manual/submit">{submit}</button>
                <button class="button button-ghost" data-post="/workflows/{id}/soil/manual/cancel">{cancel}</button>
            </div>"#,
        manual_entry = escape_html(content.manual_entry),
        inputs = inputs,
        id = id,
        submit = escape_html(content.page.submit_data),
        cancel = escape_html(content.page.cancel),
    )
}

fn render_analyzing(content: &ContentBundle, image: &UploadedImage, progress: f64) -> String {
    format!(
        r#"        <section class="card analyzing">
            <img class="crop-image" src="{image}" alt="">
            <h2>{analyzing}</h2>
            <div class="progress-bar"><div class="progress-fill" id="progress-fill" style="width: {percent:.0}%"></div></div>
            <p><span id="progress-value">{percent:.0}</span>% {complete}</p>
        </section>
"#,
        image = escape_html(image.as_str()),
        analyzing = escape_html(content.analyzing),
        percent = progress,
        complete = escape_html(content.page.complete),
    )
}

fn render_results(
    content: &ContentBundle,
    id: Uuid,
    image: &UploadedImage,
    diagnosis: &DiagnosisPayload,
) -> String {
    format!(
        r#"        <section class="card results">
            <h2>{results}</h2>
            <figure>
                <img class="crop-image" src="{image}" alt="">
                <figcaption>{analyzed_image}</figcaption>
            </figure>
            <div class="diagnosis" id="diagnosis-text">
                <h3>{disease} <span class="badge {badge}">{severity}</span></h3>
                <p class="confidence">{confidence_label}: {confidence}%</p>
                <p>{description}</p>
                <h3>{recommendations}</h3>
                <h4>{treatment_label}</h4>
                <p>{treatment}</p>
                <h4>{prevention_label}</h4>
                <p>{prevention}</p>
            </div>
            <div class="button-row">
                <button class="button" data-post="/workflows/{id}/diagnosis/reset">{retake}</button>
                <button class="button button-outline" data-speak="diagnosis-text">{speak}</button>
                <button class="button button-outline" data-help>{get_help}</button>
            </div>
        </section>
"#,
        results = escape_html(content.results),
        image = escape_html(image.as_str()),
        analyzed_image = escape_html(content.page.analyzed_image),
        disease = escape_html(&diagnosis.disease),
        badge = diagnosis.severity.badge_class(),
        severity = escape_html(content.severity.label(diagnosis.severity)),
        confidence_label = escape_html(content.confidence),
        confidence = diagnosis.confidence,
        description = escape_html(&diagnosis.description),
        recommendations = escape_html(content.recommendations),
        treatment_label = escape_html(content.page.treatment),
        treatment = escape_html(&diagnosis.treatment),
        prevention_label = escape_html(content.page.prevention),
        prevention = escape_html(&diagnosis.prevention),
        id = id,
        retake = escape_html(content.actions.retake),
        speak = escape_html(content.actions.speak_results),
        get_help = escape_html(content.actions.get_help),
    )
}

fn option(value: &str, label: &str, is_selected: bool) -> String {
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        escape_html(value),
        selected(is_selected),
        escape_html(label)
    )
}

fn selected(flag: bool) -> &'static str {
    if flag {
        " selected"
    } else {
        ""
    }
}

fn disabled(flag: bool) -> &'static str {
    if flag {
        " disabled"
    } else {
        ""
    }
}
