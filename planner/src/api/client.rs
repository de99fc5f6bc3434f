use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    AssociationResponse, DayId, Exercise, ExerciseDetailRequest, ExerciseId, ExerciseSelection,
    GenerateWorkoutIdResponse, MessageResponse, UpdateWorkoutRequest, UpdateWorkoutResponse,
    Workout, WorkoutId,
};

use super::endpoints;
use super::transport::{ApiRequest, ApiResponse, HttpTransport, Method};
use crate::domain::association::{Association, AssociationAction};
use crate::error::ClientError;

/// Typed client for the workout planner server
#[derive(Clone)]
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
}

impl<T: HttpTransport> ApiClient<T> {
    /// Create a client that talks to the origin it was served from
    pub fn new(transport: T) -> Self {
        Self::with_base_url(transport, String::new())
    }

    /// Create a client with a custom base URL
    pub fn with_base_url(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Workouts scheduled on a day
    pub async fn workouts_by_day(&self, day_id: DayId) -> Result<Vec<Workout>, ClientError> {
        self.get_json(&endpoints::workouts_by_day(day_id)).await
    }

    pub async fn list_workouts(&self) -> Result<Vec<Workout>, ClientError> {
        self.get_json(&endpoints::workouts()).await
    }

    pub async fn delete_workout(&self, workout_id: WorkoutId) -> Result<(), ClientError> {
        let response = self
            .send(ApiRequest::new(Method::Delete, self.url(&endpoints::workout(workout_id))))
            .await?;
        if !response.ok() {
            return Err(rejection_or_status::<UpdateWorkoutResponse>(&response, |r| r.error));
        }
        Ok(())
    }

    pub async fn update_workout(
        &self,
        workout_id: WorkoutId,
        request: &UpdateWorkoutRequest,
    ) -> Result<(), ClientError> {
        let response = self
            .send_json(Method::Put, &endpoints::workout(workout_id), request)
            .await?;
        if !response.ok() {
            return Err(rejection_or_status::<UpdateWorkoutResponse>(&response, |r| r.error));
        }

        let body: UpdateWorkoutResponse = serde_json::from_str(&response.body)?;
        if body.success {
            Ok(())
        } else {
            Err(ClientError::Rejected(body.error.unwrap_or_default()))
        }
    }

    /// Ask the server for a fresh workout identifier
    pub async fn generate_workout_id(&self) -> Result<WorkoutId, ClientError> {
        let body: GenerateWorkoutIdResponse = self.get_json(&endpoints::generate_workout_id()).await?;
        Ok(body.workout_id)
    }

    pub async fn list_exercises(&self, filter: Option<&str>) -> Result<Vec<Exercise>, ClientError> {
        self.get_json(&endpoints::exercises(filter)).await
    }

    pub async fn delete_exercise(&self, exercise_id: ExerciseId) -> Result<(), ClientError> {
        let response = self
            .send(ApiRequest::new(Method::Delete, self.url(&endpoints::exercise(exercise_id))))
            .await?;
        if !response.ok() {
            return Err(rejection_or_status::<MessageResponse>(&response, |r| r.error));
        }
        Ok(())
    }

    /// Every exercise, flagged with whether it belongs to the workout
    pub async fn exercises_in_workout(
        &self,
        workout_id: WorkoutId,
    ) -> Result<Vec<ExerciseSelection>, ClientError> {
        self.get_json(&endpoints::exercises_in_workout(workout_id)).await
    }

    pub async fn add_exercise_detail(
        &self,
        workout_id: WorkoutId,
        exercise_id: ExerciseId,
        request: &ExerciseDetailRequest,
    ) -> Result<MessageResponse, ClientError> {
        let response = self
            .send_json(
                Method::Post,
                &endpoints::add_exercise_detail(workout_id, exercise_id),
                request,
            )
            .await?;
        if !response.ok() {
            return Err(rejection_or_status::<MessageResponse>(&response, |r| r.error));
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Create or remove an association.
    ///
    /// The body is decoded whatever the status, since the server reports
    /// application failures as `{success: false, message}` on 4xx/5xx.
    /// The success flag is left for the caller to inspect.
    pub async fn set_association(
        &self,
        association: Association,
        action: AssociationAction,
    ) -> Result<AssociationResponse, ClientError> {
        let (method, path) = endpoints::association(association, action);
        let response = self
            .send(ApiRequest::new(method, self.url(&path)).with_body("{}".to_string()))
            .await?;

        match serde_json::from_str::<AssociationResponse>(&response.body) {
            Ok(body) => Ok(body),
            Err(_) if !response.ok() => Err(ClientError::Status {
                status: response.status,
                body: response.body,
            }),
            Err(err) => Err(err.into()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        debug!("{} {}", request.method, request.url);
        let response = self.transport.send(request).await?;
        if !response.ok() {
            warn!("Request failed with status {}", response.status);
        }
        Ok(response)
    }

    async fn send_json<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let body = serde_json::to_string(body)?;
        self.send(ApiRequest::new(method, self.url(path)).with_body(body))
            .await
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ClientError> {
        let response = self.send(ApiRequest::new(Method::Get, self.url(path))).await?;
        if !response.ok() {
            return Err(ClientError::Status {
                status: response.status,
                body: response.body,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }
}

/// Prefer the server's own error text over a bare status
fn rejection_or_status<B: DeserializeOwned>(
    response: &ApiResponse,
    message: impl FnOnce(B) -> Option<String>,
) -> ClientError {
    serde_json::from_str::<B>(&response.body)
        .ok()
        .and_then(message)
        .filter(|m| !m.trim().is_empty())
        .map(ClientError::Rejected)
        .unwrap_or_else(|| ClientError::Status {
            status: response.status,
            body: response.body.clone(),
        })
}
