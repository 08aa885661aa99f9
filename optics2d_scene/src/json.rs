use crate::{Result, SceneError};
use optics2d::{
    AnyOptic, Float, FlatMirror, Lens, OpticSystem, Point, RayEmitter, SceneObject,
    SphericalMirror,
};
use serde_json::{json, Value};

pub fn json_array_to_point(json_array: &[Value]) -> Option<Point> {
    let [x, y] = json_array else {
        return None;
    };
    Some(Point::new(x.as_f64()?, y.as_f64()?))
}

fn get<'a>(json: &'a Value, key: &str) -> Result<&'a Value> {
    json.get(key)
        .ok_or_else(|| SceneError::format(format!("missing field {key:?}")))
}

fn get_float(json: &Value, key: &str) -> Result<Float> {
    get(json, key)?
        .as_f64()
        .ok_or_else(|| SceneError::format(format!("{key:?} must be a number")))
}

fn get_point(json: &Value, key: &str) -> Result<Point> {
    get(json, key)?
        .as_array()
        .map(Vec::as_slice)
        .and_then(json_array_to_point)
        .ok_or_else(|| SceneError::format(format!("{key:?} must be an array of 2 numbers")))
}

pub fn map_json_array<C: FromIterator<T>, T>(
    json: &Value,
    map: impl FnMut(&Value) -> Result<T>,
) -> Result<C> {
    json.as_array()
        .ok_or_else(|| SceneError::format("json value must be an array"))?
        .iter()
        .map(map)
        .collect()
}

pub trait JsonType {
    /// Returns a string, unique to the type, found in the "type" field of the JSON
    /// representation of an optic of this type
    fn json_type() -> String;
}

pub trait JsonSer {
    /// Serialize `self` into a JSON object.
    fn to_json(&self) -> Value;
}

pub trait JsonDes {
    /// Deserialize from a JSON object.
    ///
    /// Returns an error if `json`'s format or values are invalid.
    fn from_json(json: &Value) -> Result<Self>
    where
        Self: Sized;
}

impl<T: JsonSer> JsonSer for [T] {
    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(T::to_json).collect())
    }
}

impl<T: JsonDes> JsonDes for Vec<T> {
    fn from_json(json: &Value) -> Result<Self> {
        map_json_array(json, T::from_json)
    }
}

impl JsonType for FlatMirror {
    fn json_type() -> String {
        "flat".into()
    }
}

impl JsonSer for FlatMirror {
    /// The format of the returned object is explained in [`Self::from_json`]
    fn to_json(&self) -> Value {
        json!({
            "location": self.location().as_slice(),
            "normal_angle": self.normal_angle(),
            "chord_length": self.chord_length(),
        })
    }
}

impl JsonDes for FlatMirror {
    /// Deserialize a flat mirror from a JSON object.
    ///
    /// The JSON object must follow the following format:
    ///
    /// ```json
    /// {
    ///     "location": [1.0, 2.0],
    ///     "normal_angle": 1.5707963267948966, // radians
    ///     "chord_length": 4.0,
    /// }
    /// ```
    fn from_json(json: &Value) -> Result<Self> {
        Ok(Self::new(
            get_point(json, "location")?,
            get_float(json, "normal_angle")?,
            get_float(json, "chord_length")?,
        )?)
    }
}

impl JsonType for SphericalMirror {
    fn json_type() -> String {
        "spherical".into()
    }
}

impl JsonSer for SphericalMirror {
    fn to_json(&self) -> Value {
        json!({
            "location": self.location().as_slice(),
            "normal_angle": self.normal_angle(),
            "chord_length": self.chord_length(),
            "focal": self.focal(),
        })
    }
}

impl JsonDes for SphericalMirror {
    /// Same format as [`FlatMirror::from_json`], with an extra `"focal"` number.
    fn from_json(json: &Value) -> Result<Self> {
        Ok(Self::new(
            get_point(json, "location")?,
            get_float(json, "normal_angle")?,
            get_float(json, "chord_length")?,
            get_float(json, "focal")?,
        )?)
    }
}

impl JsonType for Lens {
    fn json_type() -> String {
        "lens".into()
    }
}

impl JsonSer for Lens {
    fn to_json(&self) -> Value {
        let [focal1, focal2] = self.focals();
        json!({
            "location": self.location().as_slice(),
            "rotation": self.rotation(),
            "scale": self.scale(),
            "focal1": focal1,
            "focal2": focal2,
        })
    }
}

impl JsonDes for Lens {
    /// `{"location": [x, y], "rotation": r, "scale": s, "focal1": f1, "focal2": f2}`,
    /// the focal lengths default to `1.0`.
    fn from_json(json: &Value) -> Result<Self> {
        let focal = |key: &str| json.get(key).map_or(Ok(1.0), |_| get_float(json, key));

        Ok(Self::new(
            get_point(json, "location")?,
            get_float(json, "rotation")?,
            get_float(json, "scale")?,
        )?
        .with_focals(focal("focal1")?, focal("focal2")?)?)
    }
}

impl JsonSer for AnyOptic {
    /// `{"type": "flat" | "spherical" | "lens", "data": <the optic>}`
    fn to_json(&self) -> Value {
        let (json_type, data) = match self {
            Self::Flat(m) => (FlatMirror::json_type(), m.to_json()),
            Self::Spherical(m) => (SphericalMirror::json_type(), m.to_json()),
            Self::Lens(l) => (Lens::json_type(), l.to_json()),
        };

        json!({
            "type": json_type,
            "data": data,
        })
    }
}

impl JsonDes for AnyOptic {
    fn from_json(json: &Value) -> Result<Self> {
        let optic_type = get(json, "type")?
            .as_str()
            .ok_or_else(|| SceneError::format("type must be a string"))?;

        let data = get(json, "data")?;

        if optic_type == FlatMirror::json_type() {
            FlatMirror::from_json(data).map(Self::from)
        } else if optic_type == SphericalMirror::json_type() {
            SphericalMirror::from_json(data).map(Self::from)
        } else if optic_type == Lens::json_type() {
            Lens::from_json(data).map(Self::from)
        } else {
            Err(SceneError::format(format!("invalid optic type: {optic_type}")))
        }
    }
}

impl JsonSer for RayEmitter {
    /// A ray is serialized from its emitter: the trace state is not kept.
    fn to_json(&self) -> Value {
        json!({
            "origin": self.origin().as_slice(),
            "angle": self.initial_angle(),
        })
    }
}

impl JsonDes for RayEmitter {
    /// Deserialize a ray emitter from a JSON object.
    ///
    /// ```json
    /// {
    ///     "origin": [9.0, 8.0],
    ///     "angle": 0.5, // radians
    /// }
    /// ```
    fn from_json(json: &Value) -> Result<Self> {
        Ok(Self::new(
            get_point(json, "origin")?,
            get_float(json, "angle")?,
        )?)
    }
}

pub fn serialize_scene<'a>(
    optics: &[AnyOptic],
    rays: impl IntoIterator<Item = &'a RayEmitter>,
) -> Value {
    json!({
        "optics": optics.to_json(),
        "rays": Vec::from_iter(rays.into_iter().map(JsonSer::to_json)),
    })
}

pub fn serialize_system(system: &OpticSystem) -> Value {
    serialize_scene(system.optics(), system.rays())
}

pub fn deserialize_scene(json: &Value) -> Result<Vec<SceneObject>> {
    let optics = Vec::<AnyOptic>::from_json(get(json, "optics")?)?;
    let rays = Vec::<RayEmitter>::from_json(get(json, "rays")?)?;

    Ok(optics
        .into_iter()
        .map(SceneObject::from)
        .chain(rays.into_iter().map(SceneObject::from))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system() -> OpticSystem {
        let mut system = OpticSystem::new();
        system.add(FlatMirror::new([0.0, 5.0], 1.5, 10.0).unwrap());
        system.add(SphericalMirror::new([2.0, 2.0], 0.0, 4.0, 2.0).unwrap());
        system.add(
            Lens::new([8.0, 0.0], 0.25, 2.0)
                .unwrap()
                .with_focals(3.0, 4.0)
                .unwrap(),
        );
        system.add(RayEmitter::new([-5.0, 5.0], 0.0).unwrap());
        system
    }

    #[test]
    fn scene_survives_json() {
        let original = system();
        let json = serialize_system(&original);

        let restored: OpticSystem = deserialize_scene(&json).unwrap().into_iter().collect();
        assert_eq!(restored, original);
    }

    #[test]
    fn trace_state_is_not_serialized() {
        let mut traced = system();
        traced.step();

        let restored: OpticSystem = deserialize_scene(&serialize_system(&traced))
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(restored, system());
    }

    #[test]
    fn lens_focals_default() {
        let lens = Lens::from_json(&json!({
            "location": [0.0, 0.0],
            "rotation": 0.0,
            "scale": 1.0,
        }))
        .unwrap();
        assert_eq!(lens.focals(), [1.0, 1.0]);
    }

    #[test]
    fn reports_bad_fields() {
        let err = RayEmitter::from_json(&json!({ "origin": [1.0], "angle": 0.0 })).unwrap_err();
        assert!(err.to_string().contains("origin"), "{err}");

        let err = AnyOptic::from_json(&json!({ "type": "prism", "data": {} })).unwrap_err();
        assert!(err.to_string().contains("prism"), "{err}");

        let err = FlatMirror::from_json(&json!({
            "location": [0.0, 0.0],
            "normal_angle": 0.0,
            "chord_length": 0.0,
        }))
        .unwrap_err();
        assert!(matches!(err, SceneError::Configuration(_)), "{err}");

        assert!(deserialize_scene(&json!({ "optics": [] })).is_err());
    }
}
