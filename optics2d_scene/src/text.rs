use crate::{Result, SceneError};
use optics2d::{FlatMirror, Float, Lens, RayEmitter, SceneObject, SphericalMirror};

/// Parses the line-based scene format.
///
/// Each non-blank line describes one object: `TYPE, x, y, angle, ...`, with the
/// angle in degrees. `#` starts a comment.
///
/// | TYPE    | arguments                          |
/// |---------|------------------------------------|
/// | `F`     | `x, y, angle, chord`               |
/// | `S`     | `x, y, angle, chord[, focal]`      |
/// | `L`     | `x, y, angle, scale[, f1[, f2]]`   |
/// | `R`/`E` | `x, y, angle`                      |
///
/// A flat mirror's angle is the direction its face points toward.
pub fn parse_text(src: &str) -> Result<Vec<SceneObject>> {
    let mut objects = Vec::new();

    for (i, line) in src.lines().enumerate() {
        let line_no = i + 1;

        let line = line.split_once('#').map_or(line, |(content, _)| content).trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split(',').map(str::trim);
        let kind = fields.next().unwrap_or_default();

        let args = fields
            .map(|field| {
                field.parse::<Float>().map_err(|e| {
                    SceneError::parse(line_no, format!("invalid number {field:?}: {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        objects.push(parse_record(line_no, kind, &args)?);
    }

    Ok(objects)
}

fn parse_record(line_no: usize, kind: &str, args: &[Float]) -> Result<SceneObject> {
    let arg_count = |name: &str, expected: &str| {
        SceneError::parse(
            line_no,
            format!("a {name} needs {expected} arguments, not {}", args.len()),
        )
    };

    Ok(match (kind, args) {
        ("F", &[x, y, angle, chord]) => {
            FlatMirror::facing([x, y], angle.to_radians(), chord)?.into()
        }
        ("F", _) => return Err(arg_count("flat mirror", "4")),

        ("S", &[x, y, angle, chord]) => {
            SphericalMirror::new([x, y], angle.to_radians(), chord, 1.0)?.into()
        }
        ("S", &[x, y, angle, chord, focal]) => {
            SphericalMirror::new([x, y], angle.to_radians(), chord, focal)?.into()
        }
        ("S", _) => return Err(arg_count("spherical mirror", "4 or 5")),

        ("L", &[x, y, angle, scale, ref focals @ ..]) if focals.len() <= 2 => {
            let focal1 = focals.first().copied().unwrap_or(1.0);
            let focal2 = focals.get(1).copied().unwrap_or(1.0);

            Lens::new([x, y], angle.to_radians(), scale)?
                .with_focals(focal1, focal2)?
                .into()
        }
        ("L", _) => return Err(arg_count("lens", "4, 5 or 6")),

        ("R" | "E", &[x, y, angle]) => RayEmitter::new([x, y], angle.to_radians())?.into(),
        ("R" | "E", _) => return Err(arg_count("ray emitter", "3")),

        (other, _) => {
            return Err(SceneError::parse(
                line_no,
                format!("unknown object type {other:?}"),
            ))
        }
    })
}
