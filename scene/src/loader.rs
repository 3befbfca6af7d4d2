use std::ops::Range;
use std::path::Path;
use std::sync::Arc;

use logos::Logos;

use geometry::camera::Camera;
use geometry::transform::AffineTransform;
use light::DeltaLight;
use log::info;
use material::Material;
use math::hcm::{Point3, Vec3};
use radiometry::color::Color;
use shape::{Group, Sphere, Transformed};

use crate::error::Error;
use crate::token::Token;
use crate::Scene;

/// Reads and parses the scene file at `path`.
pub fn load_scene_file<P: AsRef<Path>>(path: P) -> Result<Scene, Error> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)
        .map_err(|cause| Error::MissingSceneFile(path.to_path_buf(), cause))?;
    load_scene_str(&source)
}

/// Parses a scene description and assembles the renderable `Scene`.
pub fn load_scene_str(source: &str) -> Result<Scene, Error> {
    let mut cursor = Cursor::new(source);
    let mut loader = SceneLoader::new();
    while let Some(token) = cursor.next() {
        loader.apply_directive(token, &mut cursor)?;
    }
    loader.finish()
}

/// Token stream with enough bookkeeping to report 1-based line numbers in
/// diagnostics.
struct Cursor<'a> {
    source: &'a str,
    tokens: std::vec::IntoIter<(Token, Range<usize>)>,
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        let tokens = Token::lexer(source)
            .spanned()
            .collect::<Vec<_>>()
            .into_iter();
        Cursor {
            source,
            tokens,
            offset: 0,
        }
    }

    fn next(&mut self) -> Option<Token> {
        let (token, span) = self.tokens.next()?;
        self.offset = span.start;
        Some(token)
    }

    /// Line of the most recently consumed token.
    fn line(&self) -> usize {
        self.source[..self.offset]
            .bytes()
            .filter(|b| *b == b'\n')
            .count()
            + 1
    }

    fn malformed<S: Into<String>>(&self, message: S) -> Error {
        Error::MalformedDirective {
            line: self.line(),
            message: message.into(),
        }
    }

    fn next_f32(&mut self) -> Result<f32, Error> {
        match self.next() {
            Some(Token::Number(x)) => Ok(x),
            Some(other) => Err(self.malformed(format!("expected a number, found {:?}", other))),
            None => Err(self.malformed("expected a number, found end of file")),
        }
    }

    fn next_vec3(&mut self) -> Result<Vec3, Error> {
        Ok(Vec3::new(
            self.next_f32()?,
            self.next_f32()?,
            self.next_f32()?,
        ))
    }

    fn next_point3(&mut self) -> Result<Point3, Error> {
        self.next_vec3().map(Point3::from)
    }

    fn next_color(&mut self) -> Result<Color, Error> {
        Ok(Color::new(
            self.next_f32()?,
            self.next_f32()?,
            self.next_f32()?,
        ))
    }

    fn next_word(&mut self) -> Result<String, Error> {
        match self.next() {
            Some(Token::Word(word)) => Ok(word),
            Some(other) => Err(self.malformed(format!("expected a name, found {:?}", other))),
            None => Err(self.malformed("expected a name, found end of file")),
        }
    }
}

/// Accumulates parser state directive by directive: the transform stack,
/// the mutable current material, and the scene pieces seen so far.
struct SceneLoader {
    ctm_stack: Vec<AffineTransform>,
    current_material: Material,

    image_size: Option<(u32, u32)>,
    output_file: Option<String>,
    camera: Option<Camera>,
    lights: Vec<DeltaLight>,
    ambient: Option<Color>,
    background: Option<Color>,
    root: Group,
}

impl SceneLoader {
    fn new() -> Self {
        SceneLoader {
            ctm_stack: vec![AffineTransform::identity()],
            current_material: Material::default(),
            image_size: None,
            output_file: None,
            camera: None,
            lights: vec![],
            ambient: None,
            background: None,
            root: Group::new(),
        }
    }

    fn ctm(&self) -> AffineTransform {
        *self
            .ctm_stack
            .last()
            .expect("transform stack is never empty")
    }

    /// Post-multiplies the top of the stack: each transform directive
    /// applies in the local space established by the directives before it.
    fn compose(&mut self, op: AffineTransform) {
        let top = self
            .ctm_stack
            .last_mut()
            .expect("transform stack is never empty");
        *top = *top * op;
    }

    fn apply_directive(&mut self, token: Token, cursor: &mut Cursor) -> Result<(), Error> {
        match token {
            Token::KwSize => {
                let width = cursor.next_f32()? as u32;
                let height = cursor.next_f32()? as u32;
                if width == 0 || height == 0 {
                    return Err(cursor.malformed("image size must be positive"));
                }
                self.image_size = Some((width, height));
            }
            Token::KwOutput => {
                self.output_file = Some(cursor.next_word()?);
            }
            Token::KwCamera => {
                let eye = cursor.next_point3()?;
                let forward = cursor.next_vec3()?;
                let up = cursor.next_vec3()?;
                let fov_y = math::new_deg(cursor.next_f32()?);
                if forward.is_zero() || up.is_zero() {
                    return Err(cursor.malformed("camera axes must be nonzero"));
                }
                self.camera = Some(Camera::new(eye, forward, up, fov_y));
            }
            Token::KwBackground => {
                self.background = Some(cursor.next_color()?);
            }

            Token::KwDirectional => self.add_light("directional", cursor)?,
            Token::KwPoint => self.add_light("point", cursor)?,
            Token::KwAmbient => {
                self.ambient = Some(cursor.next_color()?);
            }

            Token::KwDiffuse => {
                self.current_material.diffuse = cursor.next_color()?;
            }
            Token::KwSpecular => {
                self.current_material.specular = cursor.next_color()?;
            }
            Token::KwEmission => {
                self.current_material.emission = cursor.next_color()?;
            }
            Token::KwShininess => {
                self.current_material.shininess = cursor.next_f32()?;
            }

            Token::KwPushTransform => {
                let top = self.ctm();
                self.ctm_stack.push(top);
            }
            Token::KwPopTransform => {
                if self.ctm_stack.len() <= 1 {
                    return Err(cursor.malformed("popTransform without a matching pushTransform"));
                }
                self.ctm_stack.pop();
            }
            Token::KwTranslate => {
                let t = cursor.next_vec3()?;
                self.compose(AffineTransform::translater(t));
            }
            Token::KwRotate => {
                let axis = cursor.next_vec3()?;
                let degrees = cursor.next_f32()?;
                if axis.is_zero() {
                    return Err(cursor.malformed("rotate axis must be nonzero"));
                }
                self.compose(AffineTransform::rotater(axis, math::new_deg(degrees)));
            }
            Token::KwScale => {
                let s = cursor.next_vec3()?;
                if s.x == 0.0 || s.y == 0.0 || s.z == 0.0 {
                    return Err(Error::DegenerateTransform {
                        line: cursor.line(),
                    });
                }
                self.compose(AffineTransform::scaler(s));
            }

            Token::KwSphere => {
                let center = cursor.next_point3()?;
                let radius = cursor.next_f32()?;
                // Snapshot of the current material: directives that change
                // it later must not reach back into this primitive.
                let material = Arc::new(self.current_material.clone());
                let sphere = Sphere::new(center, radius, material);
                self.root
                    .add(Box::new(Transformed::new(Box::new(sphere), self.ctm())));
            }

            Token::Number(_) => {
                return Err(cursor.malformed("stray number outside any directive"));
            }
            Token::Word(word) => {
                return Err(Error::UnknownDirective {
                    line: cursor.line(),
                    word,
                });
            }
            Token::Error => {
                return Err(cursor.malformed("unrecognized character"));
            }
            // Skipped by the lexer; listed to keep the match exhaustive.
            Token::Whitespace | Token::Comment => {}
        }
        Ok(())
    }

    fn add_light(&mut self, kind: &str, cursor: &mut Cursor) -> Result<(), Error> {
        let position = cursor.next_vec3()?;
        let color = cursor.next_color()?;
        let light = DeltaLight::from_kind(kind, position, color)
            .ok_or_else(|| Error::UnknownLightKind(kind.to_string()))?;
        self.lights.push(light);
        Ok(())
    }

    fn finish(self) -> Result<Scene, Error> {
        let (width, height) = self.image_size.ok_or(Error::IncompleteScene("size"))?;
        let mut camera = self.camera.ok_or(Error::IncompleteScene("camera"))?;
        let output_file = self.output_file.ok_or(Error::IncompleteScene("output"))?;
        camera.set_aspect_ratio(width as f32 / height as f32);

        info!(
            "scene loaded: {} primitives, {} lights, {}x{} -> {}",
            self.root.len(),
            self.lights.len(),
            width,
            height,
            output_file
        );

        Ok(Scene {
            camera,
            lights: self.lights,
            ambient: self.ambient.unwrap_or_else(Color::black),
            root: self.root,
            width,
            height,
            output_file,
            background: self.background.unwrap_or_else(|| Color::gray(0.7)),
        })
    }
}
