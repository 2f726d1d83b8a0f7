//! Member endpoints
//!
//! Includes the paginated listing the synchronizer pages through and the
//! camelCase payload builder used when pushing onboarding answers upstream.

use serde_json::{Value, json};
use shared::client::OnboardingForm;

use crate::ClientResult;
use crate::http::AmpeliClient;
use crate::types::{RemoteMember, RemoteMemberPage};

impl AmpeliClient {
    /// Fetch one page of the member listing
    pub async fn list_members(&self, page: u32) -> ClientResult<RemoteMemberPage> {
        self.get(&format!("/members?page={}", page)).await
    }

    /// List all members, empty when the API is unavailable
    pub async fn get_all_members(&self) -> Vec<RemoteMember> {
        match self.get::<Vec<RemoteMember>>("/members").await {
            Ok(members) => members,
            Err(e) => {
                tracing::warn!(error = %e, "Member listing failed, returning empty list");
                Vec::new()
            }
        }
    }

    /// Fetch a member by id
    pub async fn get_member_by_id(&self, member_id: i64) -> ClientResult<RemoteMember> {
        self.get(&format!("/members/{}", member_id)).await
    }

    /// Fetch a member by the owning user's id
    pub async fn get_member_by_user_id(&self, user_id: i64) -> ClientResult<RemoteMember> {
        self.get(&format!("/members/user/{}", user_id)).await
    }

    /// Fetch a member by email, None when missing or unreachable
    pub async fn get_member_by_email(&self, email: &str) -> Option<RemoteMember> {
        match self
            .get::<RemoteMember>(&format!("/members/email/{}", email))
            .await
        {
            Ok(member) => Some(member),
            Err(e) => {
                tracing::debug!(error = %e, "Member lookup by email failed");
                None
            }
        }
    }

    /// Members in a given faith stage
    pub async fn get_members_by_faith_stage(
        &self,
        faith_stage: &str,
    ) -> ClientResult<Vec<RemoteMember>> {
        self.get(&format!("/members/faith-stage/{}", faith_stage))
            .await
    }

    /// Members with a given interest area
    pub async fn get_members_by_interest(&self, interest: &str) -> ClientResult<Vec<RemoteMember>> {
        self.get(&format!("/members/interest/{}", interest)).await
    }

    /// Members volunteering in a given area
    pub async fn get_members_by_volunteer_area(
        &self,
        area: &str,
    ) -> ClientResult<Vec<RemoteMember>> {
        self.get(&format!("/members/volunteer-area/{}", area)).await
    }

    /// Create a member record
    pub async fn create_member(&self, member: &Value) -> ClientResult<RemoteMember> {
        self.post("/members", member).await
    }

    /// Update a member record
    pub async fn update_member(&self, member_id: i64, member: &Value) -> ClientResult<RemoteMember> {
        self.put(&format!("/members/{}", member_id), member).await
    }

    /// Remove a member record
    pub async fn delete_member(&self, member_id: i64) -> ClientResult<Value> {
        self.delete(&format!("/members/{}", member_id)).await
    }
}

/// Build the camelCase member payload the remote API expects from an
/// onboarding form submission
pub fn format_member_payload(form: &OnboardingForm, user_id: i64) -> Value {
    let availability = format!(
        "{} - {}",
        form.available_days.as_deref().unwrap_or(""),
        form.available_times.as_deref().unwrap_or("")
    );

    json!({
        "user": { "id": user_id },
        "fullName": form.full_name,
        "birthDate": form.birth_date.as_deref().unwrap_or(""),
        "gender": form.gender.as_deref().unwrap_or(""),
        "maritalStatus": form.marital_status.as_deref().unwrap_or(""),
        "email": form.email,
        "phone": form.phone.as_deref().unwrap_or(""),
        "churchAttendanceTime": form.church_attendance_time.as_deref().unwrap_or(""),
        "previousChurches": form.previous_churches.as_deref().unwrap_or(""),
        "howFoundChurch": form.church_discovery.as_deref().unwrap_or(""),
        "previousParticipation": form.previous_participation.as_deref().unwrap_or(""),
        "interestAreas": form.volunteer_areas.as_deref().unwrap_or(""),
        "skillsGifts": form.gifts_aptitudes.as_deref().unwrap_or(""),
        "volunteerArea": form.volunteer_areas.as_deref().unwrap_or(""),
        "availableDaysTimes": availability,
        "eventPreference": form.event_preference.as_deref().unwrap_or(""),
        "interestsIn": form.community_interests.as_deref().unwrap_or(""),
        "churchSearch": form.seeking_in_church.as_deref().unwrap_or(""),
        "openToNewGroups": form.open_to_new_groups.unwrap_or(false),
        "groupPreference": form.group_preferences.as_deref().unwrap_or(""),
        "faithStage": form.faith_stage.as_deref().unwrap_or(""),
        "pastoralSupportInterest": form.pastoral_care_interest.unwrap_or(false),
        "faithDifficulties": form.faith_challenges.as_deref().unwrap_or(""),
    })
}

/// Validate a member payload before sending it upstream
pub fn validate_member_payload(payload: &Value) -> bool {
    let full_name = payload.get("fullName").and_then(Value::as_str).unwrap_or("");
    let email = payload.get("email").and_then(Value::as_str).unwrap_or("");

    if full_name.is_empty() || email.is_empty() {
        return false;
    }

    email.contains('@') && email.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_member_payload() {
        let form = OnboardingForm {
            full_name: "Maria Silva".into(),
            email: "maria@teste.com".into(),
            birth_date: Some("1985-03-20".into()),
            volunteer_areas: Some("louvor".into()),
            available_days: Some("sábado".into()),
            available_times: Some("manhã".into()),
            open_to_new_groups: Some(true),
            ..Default::default()
        };

        let payload = format_member_payload(&form, 42);
        assert_eq!(payload["user"]["id"], 42);
        assert_eq!(payload["fullName"], "Maria Silva");
        assert_eq!(payload["birthDate"], "1985-03-20");
        assert_eq!(payload["volunteerArea"], "louvor");
        assert_eq!(payload["availableDaysTimes"], "sábado - manhã");
        assert_eq!(payload["openToNewGroups"], true);
    }

    #[test]
    fn test_validate_member_payload() {
        let ok = json!({"fullName": "Maria", "email": "maria@teste.com"});
        assert!(validate_member_payload(&ok));

        let missing_name = json!({"fullName": "", "email": "maria@teste.com"});
        assert!(!validate_member_payload(&missing_name));

        let bad_email = json!({"fullName": "Maria", "email": "maria-teste"});
        assert!(!validate_member_payload(&bad_email));
    }
}
