//! Onboarding Handlers
//!
//! Profile onboarding: the submitted form goes to the remote API first
//! (create or update, depending on whether the member already exists there),
//! then the local mirror is upserted and the member marked as onboarded.

use axum::{Extension, Json, extract::State};

use ampeli_client::members::format_member_payload;
use shared::client::{OnboardingForm, OnboardingStatus};
use shared::models::MemberUpsert;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::member;
use crate::sync::mapper;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_TEXT_LEN, validate_email_shape,
    validate_optional_text, validate_required_text,
};
use crate::utils::{ApiResponse, AppError, AppResult};

/// GET /api/onboarding/status
pub async fn status(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<OnboardingStatus>> {
    let completed = member::find_by_email(&state.pool, &user.email)
        .await?
        .map(|m| m.onboarding_completed)
        .unwrap_or(false);

    Ok(Json(OnboardingStatus { completed }))
}

fn validate_form(form: &OnboardingForm) -> AppResult<()> {
    validate_required_text(&form.full_name, "full_name", MAX_NAME_LEN)?;
    validate_email_shape(&form.email)?;
    validate_optional_text(&form.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&form.gender, "gender", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&form.marital_status, "marital_status", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&form.faith_stage, "faith_stage", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&form.previous_churches, "previous_churches", MAX_TEXT_LEN)?;
    validate_optional_text(&form.volunteer_areas, "volunteer_areas", MAX_TEXT_LEN)?;
    validate_optional_text(&form.gifts_aptitudes, "gifts_aptitudes", MAX_TEXT_LEN)?;
    validate_optional_text(&form.community_interests, "community_interests", MAX_TEXT_LEN)?;
    validate_optional_text(&form.seeking_in_church, "seeking_in_church", MAX_TEXT_LEN)?;
    validate_optional_text(&form.faith_challenges, "faith_challenges", MAX_TEXT_LEN)?;
    Ok(())
}

fn local_upsert(form: &OnboardingForm, inchurch_id: String) -> MemberUpsert {
    MemberUpsert {
        inchurch_id,
        full_name: form.full_name.trim().to_string(),
        gender: form.gender.clone(),
        birth_date: mapper::parse_remote_date(form.birth_date.as_deref()),
        marital_status: form.marital_status.clone(),
        phone: form.phone.clone(),
        email: Some(form.email.clone()),
        gifts_aptitudes: form.gifts_aptitudes.clone(),
        church_attendance_time: form.church_attendance_time.clone(),
        previous_churches: form.previous_churches.clone(),
        previous_participation: form.previous_participation.clone(),
        volunteer_interest: Some(form.volunteer_areas.is_some()),
        volunteer_areas: form.volunteer_areas.clone(),
        available_days: form.available_days.clone(),
        available_times: form.available_times.clone(),
        community_interests: form.community_interests.clone(),
        seeking_in_church: form.seeking_in_church.clone(),
        open_to_new_groups: form.open_to_new_groups,
        group_preferences: form.group_preferences.clone(),
        faith_stage: form.faith_stage.clone(),
        pastoral_care_interest: form.pastoral_care_interest,
        faith_challenges: form.faith_challenges.clone(),
        ..Default::default()
    }
}

/// POST /api/onboarding
///
/// Pushes the profile to the remote API (update when the member already
/// exists there, create otherwise), then upserts the local mirror and marks
/// onboarding as complete.
pub async fn submit(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(form): Json<OnboardingForm>,
) -> AppResult<Json<ApiResponse<OnboardingStatus>>> {
    validate_form(&form)?;

    let user_id: i64 = user.id.parse().unwrap_or(0);
    let payload = format_member_payload(&form, user_id);

    let remote = match state.api.get_member_by_email(&form.email).await {
        Some(existing) => state.api.update_member(existing.id, &payload).await,
        None => state.api.create_member(&payload).await,
    }
    .map_err(|e| AppError::with_message(e.error_code(), e.to_string()))?;

    let (member_id, created) =
        member::upsert(&state.pool, &local_upsert(&form, remote.id.to_string())).await?;
    member::set_onboarding_completed(&state.pool, member_id, true).await?;

    tracing::info!(
        member_id,
        created,
        email = %form.email,
        "Onboarding completed"
    );

    Ok(Json(ApiResponse::success_with_message(
        "Perfil atualizado com sucesso",
        OnboardingStatus { completed: true },
    )))
}
