//! HR profile settings.

use std::sync::Arc;

use hrdesk_core::Result;
use hrdesk_core::hr_profile::{HrProfile, HrProfileRepository};

/// Field-by-field changes to the HR profile. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mobile_number: Option<String>,
    pub designation: Option<String>,
    pub profile_photo: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    fn apply(self, profile: &mut HrProfile) {
        if let Some(value) = self.first_name {
            profile.first_name = value;
        }
        if let Some(value) = self.last_name {
            profile.last_name = value;
        }
        if let Some(value) = self.mobile_number {
            profile.mobile_number = value;
        }
        if let Some(value) = self.designation {
            profile.designation = value;
        }
        if let Some(value) = self.profile_photo {
            profile.profile_photo = if value.is_empty() { None } else { Some(value) };
        }
    }
}

pub struct SettingsService {
    profiles: Arc<dyn HrProfileRepository>,
}

impl SettingsService {
    pub fn new(profiles: Arc<dyn HrProfileRepository>) -> Self {
        Self { profiles }
    }

    /// The stored profile, or an empty one when nothing was saved yet.
    pub async fn profile(&self) -> Result<HrProfile> {
        Ok(self.profiles.get().await?.unwrap_or_default())
    }

    /// Replaces the stored profile.
    pub async fn save_profile(&self, profile: &HrProfile) -> Result<()> {
        self.profiles.save(profile).await?;
        tracing::info!("HR profile saved");
        Ok(())
    }

    /// Applies `update` to the current profile and saves the result as a
    /// whole new value.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<HrProfile> {
        let mut profile = self.profile().await?;
        update.apply(&mut profile);
        self.save_profile(&profile).await?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrdesk_infrastructure::JsonHrProfileRepository;
    use tempfile::TempDir;

    fn create_service() -> (SettingsService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let repo = Arc::new(JsonHrProfileRepository::with_dir(temp_dir.path()));
        (SettingsService::new(repo), temp_dir)
    }

    #[tokio::test]
    async fn test_profile_defaults_to_empty() {
        let (service, _temp_dir) = create_service();
        assert_eq!(service.profile().await.unwrap(), HrProfile::default());
    }

    #[tokio::test]
    async fn test_update_keeps_untouched_fields() {
        let (service, _temp_dir) = create_service();
        service
            .save_profile(&HrProfile {
                first_name: "Meera".to_string(),
                last_name: "Iyer".to_string(),
                designation: "HR Manager".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        let updated = service
            .update_profile(ProfileUpdate {
                mobile_number: Some("9811111111".to_string()),
                profile_photo: Some("data:image/png;base64,AAAA".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.display_name(), "Meera Iyer");
        assert_eq!(updated.mobile_number, "9811111111");
        assert_eq!(service.profile().await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_empty_photo_clears_it() {
        let (service, _temp_dir) = create_service();
        service
            .update_profile(ProfileUpdate {
                profile_photo: Some("photo".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let cleared = service
            .update_profile(ProfileUpdate {
                profile_photo: Some(String::new()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(cleared.profile_photo, None);
    }
}
