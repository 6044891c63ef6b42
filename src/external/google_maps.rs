use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Directions;
use crate::{
    config::Config,
    entities::{Coordinates, RouteLeg, TravelMode},
    error::{invalid_input_error, provider_authorization_error, upstream_error, Error},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response {
    status: String,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
    error_message: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct DirectionsRoute {
    #[serde(default)]
    legs: Vec<Leg>,
    overview_polyline: Option<Polyline>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Leg {
    distance: Option<Text>,
    duration: Option<Text>,
    #[serde(default)]
    start_address: String,
    #[serde(default)]
    end_address: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Text {
    text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Polyline {
    points: String,
}

#[derive(Clone)]
pub struct GoogleMaps {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl fmt::Debug for GoogleMaps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleMaps")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl GoogleMaps {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: config.api_base.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl Directions for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn compute_route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        travel_mode: TravelMode,
    ) -> Result<RouteLeg, Error> {
        let origin: String = origin.into();
        let destination: String = destination.into();

        let url = format!("https://{}/maps/api/directions/json", self.api_base);

        let res = self
            .client
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .query(&[("origin", origin)])
            .query(&[("destination", destination)])
            .query(&[("mode", travel_mode.query_value())])
            .send()
            .await?;

        check_status(res.status())?;

        let data: Response = res.json().await?;

        first_leg(data)
    }
}

fn check_status(status: StatusCode) -> Result<(), Error> {
    let status_code = status.as_u16();

    if status_code == 401 || status_code == 403 {
        return Err(provider_authorization_error(status_code));
    } else if (400..500).contains(&status_code) {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    Ok(())
}

fn first_leg(data: Response) -> Result<RouteLeg, Error> {
    match data.status.as_str() {
        "OK" => {}
        "REQUEST_DENIED" | "OVER_QUERY_LIMIT" | "OVER_DAILY_LIMIT" => {
            tracing::warn!(
                "directions request denied: {}",
                data.error_message.as_deref().unwrap_or("no details")
            );
            return Err(provider_authorization_error(data.status));
        }
        _ => return Err(upstream_error()),
    }

    let route = data.routes.into_iter().next().ok_or_else(upstream_error)?;
    let polyline = route.overview_polyline.map(|polyline| polyline.points);
    let leg = route.legs.into_iter().next().ok_or_else(upstream_error)?;

    Ok(RouteLeg {
        distance: leg.distance.map(|text| text.text).unwrap_or_default(),
        duration: leg.duration.map(|text| text.text).unwrap_or_default(),
        start_address: leg.start_address,
        end_address: leg.end_address,
        polyline,
    })
}
