/*
 * Copyright (c) 2024 Project CHIP Authors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

clusters! {
    ColorControl = 0x0300 {
        attributes {
            0x0000 => CurrentHue,
            0x0001 => CurrentSaturation,
            0x0002 => RemainingTime,
            0x0003 => CurrentX,
            0x0004 => CurrentY,
            0x0005 => DriftCompensation,
            0x0006 => CompensationText,
            0x0007 => ColorTemperatureMireds,
            0x0008 => ColorMode,
            0x000F => Options,
            0x0010 => NumberOfPrimaries,
            0x0011 => Primary1X,
            0x0012 => Primary1Y,
            0x0013 => Primary1Intensity,
            0x0015 => Primary2X,
            0x0016 => Primary2Y,
            0x0017 => Primary2Intensity,
            0x0019 => Primary3X,
            0x001A => Primary3Y,
            0x001B => Primary3Intensity,
            0x0020 => Primary4X,
            0x0021 => Primary4Y,
            0x0022 => Primary4Intensity,
            0x0024 => Primary5X,
            0x0025 => Primary5Y,
            0x0026 => Primary5Intensity,
            0x0028 => Primary6X,
            0x0029 => Primary6Y,
            0x002A => Primary6Intensity,
            0x0030 => WhitePointX,
            0x0031 => WhitePointY,
            0x0032 => ColorPointRX,
            0x0033 => ColorPointRY,
            0x0034 => ColorPointRIntensity,
            0x0036 => ColorPointGX,
            0x0037 => ColorPointGY,
            0x0038 => ColorPointGIntensity,
            0x003A => ColorPointBX,
            0x003B => ColorPointBY,
            0x003C => ColorPointBIntensity,
            0x4000 => EnhancedCurrentHue,
            0x4001 => EnhancedColorMode,
            0x4002 => ColorLoopActive,
            0x4003 => ColorLoopDirection,
            0x4004 => ColorLoopTime,
            0x4005 => ColorLoopStartEnhancedHue,
            0x4006 => ColorLoopStoredEnhancedHue,
            0x400A => ColorCapabilities,
            0x400B => ColorTempPhysicalMinMireds,
            0x400C => ColorTempPhysicalMaxMireds,
            0x400D => CoupleColorTempToLevelMinMireds,
            0x4010 => StartUpColorTemperatureMireds,
        }
        events {}
        commands {
            0x00 => MoveToHue,
            0x01 => MoveHue,
            0x02 => StepHue,
            0x03 => MoveToSaturation,
            0x04 => MoveSaturation,
            0x05 => StepSaturation,
            0x06 => MoveToHueAndSaturation,
            0x07 => MoveToColor,
            0x08 => MoveColor,
            0x09 => StepColor,
            0x0A => MoveToColorTemperature,
            0x40 => EnhancedMoveToHue,
            0x41 => EnhancedMoveHue,
            0x42 => EnhancedStepHue,
            0x43 => EnhancedMoveToHueAndSaturation,
            0x44 => ColorLoopSet,
            0x47 => StopMoveStep,
            0x4B => MoveColorTemperature,
            0x4C => StepColorTemperature,
        }
    }

    BallastConfiguration = 0x0301 {
        attributes {
            0x0000 => PhysicalMinLevel,
            0x0001 => PhysicalMaxLevel,
            0x0002 => BallastStatus,
            0x0010 => MinLevel,
            0x0011 => MaxLevel,
            0x0014 => IntrinsicBallastFactor,
            0x0015 => BallastFactorAdjustment,
            0x0020 => LampQuantity,
            0x0030 => LampType,
            0x0031 => LampManufacturer,
            0x0032 => LampRatedHours,
            0x0033 => LampBurnHours,
            0x0034 => LampAlarmMode,
            0x0035 => LampBurnHoursTripPoint,
        }
        events {}
        commands {}
    }
}
